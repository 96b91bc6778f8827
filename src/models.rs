pub mod alias_index;
pub use alias_index::{AliasIndex, AliasKind};

pub mod alias_index_store;
pub use alias_index_store::{rebuild_search_map, AliasIndexStore};

pub mod company_directory_loader;
pub use company_directory_loader::{CompanyDirectoryFormat, CompanyDirectoryLoader};

pub mod company_record;
pub use company_record::{find_company, CompanyRecord};

pub mod config;
pub use config::PortalConfig;

pub mod document_registry;
pub use document_registry::{
    collect_document_sections, DocumentLink, DocumentRegistry, DocumentSection,
};

pub mod error;
pub use error::Error;

pub mod request_log;
pub use request_log::{RequestLog, RequestRecord};
