pub mod metadata;
pub mod university_contract;

pub use metadata::ContractMetadata;
pub use university_contract::UniversityContract;
