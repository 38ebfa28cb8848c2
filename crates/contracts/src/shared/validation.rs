use thiserror::Error;

/// Локальные проверки форм до обращения к backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose a file")]
    MissingFile,

    #[error("Please choose a job, folder or supplier")]
    MissingReference,

    #[error("The affected item name is required")]
    MissingIssueItem,

    #[error("Job role name is required")]
    MissingRoleName,

    #[error("Glass name and code are required")]
    MissingGlassFields,

    #[error("Please enter a folder name")]
    MissingFolderName,
}
