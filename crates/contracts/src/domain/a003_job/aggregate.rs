use serde::{Deserialize, Serialize};

/// Вложенный клиент в старом формате задания
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobCustomer {
    #[serde(default)]
    pub name: Option<String>,
}

/// Задание (заказ клиента), только поля, нужные UI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: Option<String>,
    pub customer: Option<JobCustomer>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub location: Option<String>,
}

impl Job {
    /// Customer display name: nested `customer.name` wins over the flat field.
    pub fn display_customer(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .or(self.customer_name.as_deref())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_name_sources() {
        let nested: Job =
            serde_json::from_str(r#"{"id":"JOB-1","title":"Mutfak","customer":{"name":"Ayşe"},"customerName":"Eski"}"#)
                .unwrap();
        assert_eq!(nested.display_customer(), Some("Ayşe"));

        let flat: Job = serde_json::from_str(r#"{"id":"JOB-2","customerName":"Mehmet"}"#).unwrap();
        assert_eq!(flat.display_customer(), Some("Mehmet"));
        assert_eq!(flat.display_title(), "JOB-2");
    }
}
