use serde::{Deserialize, Serialize};

/// Монтажная бригада
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    /// Backend отдаёт название в поле `ad`
    #[serde(alias = "ad")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_alias() {
        let teams: Vec<Team> =
            serde_json::from_str(r#"[{"id":"T1","ad":"Ekip A"},{"id":"T2","name":"Ekip B"}]"#).unwrap();
        assert_eq!(teams[0].name, "Ekip A");
        assert_eq!(teams[1].name, "Ekip B");
    }
}
