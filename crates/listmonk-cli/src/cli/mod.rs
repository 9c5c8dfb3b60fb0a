/*
[INPUT]:  Command line arguments
[OUTPUT]: Parsed Cli with one subcommand per API area
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding subcommands or flags
*/

pub mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use listmonk_adapter::{ContentType, ListType, Optin, PerPage, SubscriberStatus};

#[derive(Parser, Debug)]
#[command(name = "listmonk-cli", version, about = "Command line client for the Listmonk API")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the server is up
    Health,
    /// Manage subscribers
    #[command(subcommand)]
    Subscribers(SubscriberCommand),
    /// Manage mailing lists
    #[command(subcommand)]
    Lists(ListCommand),
    /// Send or preview campaigns
    #[command(subcommand)]
    Campaigns(CampaignCommand),
    /// Transactional messages
    #[command(subcommand)]
    Tx(TxCommand),
    /// Media library
    #[command(subcommand)]
    Media(MediaCommand),
    /// Bulk imports
    #[command(subcommand)]
    Import(ImportCommand),
    /// Send a raw request to any endpoint under /api
    Request {
        /// HTTP method, e.g. GET or POST
        method: String,
        /// Endpoint path relative to /api, e.g. /subscribers
        endpoint: String,
        /// JSON object sent as query (GET) or body (other methods)
        #[arg(long)]
        data: Option<String>,
    },
    /// Write a configuration file
    Init {
        #[arg(long, value_name = "PATH", default_value = "listmonk.yaml")]
        output: PathBuf,
        /// Write the default values without prompting
        #[arg(long)]
        defaults: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SubscriberCommand {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        list_id: Option<i64>,
        #[arg(long)]
        page: Option<u32>,
        /// Page size, or `all`
        #[arg(long)]
        per_page: Option<PerPage>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// List id to subscribe to; repeatable
        #[arg(long = "list", required = true)]
        lists: Vec<i64>,
        #[arg(long, value_enum, default_value_t = StatusArg::Enabled)]
        status: StatusArg,
        /// Skip double opt-in confirmation
        #[arg(long)]
        preconfirm: bool,
    },
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    Blocklist {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        /// Page size, or `all`
        #[arg(long)]
        per_page: Option<PerPage>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "type", value_enum, default_value_t = ListTypeArg::Public)]
        list_type: ListTypeArg,
        #[arg(long, value_enum, default_value_t = OptinArg::Single)]
        optin: OptinArg,
        #[arg(long)]
        description: Option<String>,
        /// Tag; repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CampaignCommand {
    /// Schedule a campaign, or park it as a draft with --later
    Send {
        id: i64,
        #[arg(long)]
        later: bool,
    },
    /// Print the rendered campaign body
    Preview {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum TxCommand {
    Send {
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: String,
        #[arg(long, default_value_t = 0)]
        template_id: i64,
        #[arg(long)]
        from: Option<String>,
        #[arg(long, value_enum, default_value_t = ContentTypeArg::Html)]
        content_type: ContentTypeArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum MediaCommand {
    Upload {
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImportCommand {
    /// Upload a CSV or ZIP of subscribers
    Subscribers {
        path: PathBuf,
        /// Target list id; repeatable
        #[arg(long = "list")]
        lists: Vec<i64>,
        #[arg(long, value_enum, default_value_t = ImportModeArg::Subscribe)]
        mode: ImportModeArg,
        #[arg(long, default_value = ",")]
        delim: String,
        #[arg(long)]
        overwrite: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Enabled,
    Disabled,
}

impl From<StatusArg> for SubscriberStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Enabled => SubscriberStatus::Enabled,
            StatusArg::Disabled => SubscriberStatus::Disabled,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTypeArg {
    Public,
    Private,
}

impl From<ListTypeArg> for ListType {
    fn from(value: ListTypeArg) -> Self {
        match value {
            ListTypeArg::Public => ListType::Public,
            ListTypeArg::Private => ListType::Private,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptinArg {
    Single,
    Double,
}

impl From<OptinArg> for Optin {
    fn from(value: OptinArg) -> Self {
        match value {
            OptinArg::Single => Optin::Single,
            OptinArg::Double => Optin::Double,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTypeArg {
    Html,
    Markdown,
    Plain,
}

impl From<ContentTypeArg> for ContentType {
    fn from(value: ContentTypeArg) -> Self {
        match value {
            ContentTypeArg::Html => ContentType::Html,
            ContentTypeArg::Markdown => ContentType::Markdown,
            ContentTypeArg::Plain => ContentType::Plain,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportModeArg {
    Subscribe,
    Blocklist,
}

impl ImportModeArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportModeArg::Subscribe => "subscribe",
            ImportModeArg::Blocklist => "blocklist",
        }
    }
}
