use clap::Parser;
use std::path::PathBuf;
use userstore::api::{self, Arguments};

#[derive(Parser, Debug)]
#[command(name = "userstore", bin_name = "userstore", version)]
#[command(about = "Manage user records kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Operation to run: list, add, remove or findById
    #[arg(long)]
    pub operation: Option<String>,

    /// Backing file holding the records
    #[arg(long = "fileName", value_name = "PATH")]
    pub file_name: Option<String>,

    /// Record id (remove, findById)
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Record as JSON, e.g. '{"id":"1","email":"a@b.com","age":30}' (add)
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Config file to load on top of the user config
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    /// Operand mapping handed to the library. Unset flags become empty strings,
    /// which the library treats as missing.
    pub fn arguments(&self) -> Arguments {
        [
            (api::OPERATION, &self.operation),
            (api::FILE_NAME, &self.file_name),
            (api::ID, &self.id),
            (api::ITEM, &self.item),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.clone().unwrap_or_default()))
        .collect()
    }
}
