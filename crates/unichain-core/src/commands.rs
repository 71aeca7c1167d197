//! Transactions the contract can execute
//!
//! A `Transaction` is a fully bound invocation: the function has been
//! resolved through the dispatch table and its arguments checked.

/// One bound contract invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    UniversityExists { cnpj: String },

    CreateUniversity {
        cnpj: String,
        university_name: String,
    },

    ReadUniversity { cnpj: String },

    /// Full replacement of the stored record
    UpdateUniversity {
        cnpj: String,
        university_name: String,
    },

    DeleteUniversity { cnpj: String },
}

impl Transaction {
    /// Registered function name of this transaction
    pub fn name(&self) -> &'static str {
        match self {
            Transaction::UniversityExists { .. } => "universityExists",
            Transaction::CreateUniversity { .. } => "createUniversity",
            Transaction::ReadUniversity { .. } => "readUniversity",
            Transaction::UpdateUniversity { .. } => "updateUniversity",
            Transaction::DeleteUniversity { .. } => "deleteUniversity",
        }
    }

    /// Record key the transaction operates on
    pub fn cnpj(&self) -> &str {
        match self {
            Transaction::UniversityExists { cnpj }
            | Transaction::CreateUniversity { cnpj, .. }
            | Transaction::ReadUniversity { cnpj }
            | Transaction::UpdateUniversity { cnpj, .. }
            | Transaction::DeleteUniversity { cnpj } => cnpj,
        }
    }
}
