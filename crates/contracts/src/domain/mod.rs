pub mod a001_document;
pub mod a002_folder;
pub mod a003_job;
pub mod a004_supplier;
pub mod a005_team;
pub mod a006_company_settings;
pub mod a007_job_role;
pub mod a008_glass_type;
pub mod a009_assembly_task;
