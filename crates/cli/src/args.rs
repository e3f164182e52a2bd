//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `VSPHERE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `config_context` module).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vsphere-cli")]
#[command(about = "Report vSphere datastore usage and storage policy compatibility", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vsphere-cli -s vcenter.example.com -u administrator@vsphere.local storage-policy-compatibility --storage-policy-name Gold\n  vsphere-cli list-datastores --datacenter-name DC1\n  vsphere-cli --output json list-storage-policies\n"
)]
pub struct Cli {
    /// vCenter host name or address
    #[arg(short = 's', long, global = true, env = "VSPHERE_HOST")]
    pub host: Option<String>,

    /// vCenter HTTPS port (default 443)
    #[arg(short = 'o', long, global = true, env = "VSPHERE_PORT")]
    pub port: Option<u16>,

    /// Full base URL; overrides --host and --port (e.g., https://vcenter.example.com)
    #[arg(long, global = true, env = "VSPHERE_BASE_URL")]
    pub base_url: Option<String>,

    /// User name to log in with
    #[arg(short = 'u', long = "user", global = true, env = "VSPHERE_USERNAME")]
    pub username: Option<String>,

    /// Password for the user
    #[arg(short, long, global = true, env = "VSPHERE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "VSPHERE_DISABLE_SSL_VERIFICATION")]
    pub disable_ssl_verification: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VSPHERE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Port of the Storage Policy endpoint (defaults to the scheme's port)
    #[arg(long, global = true, env = "VSPHERE_PBM_PORT")]
    pub pbm_port: Option<u16>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the datastores compatible with a storage policy
    StoragePolicyCompatibility {
        /// Storage policy name, or any part of it (case-sensitive)
        #[arg(long)]
        storage_policy_name: String,
    },

    /// Print capacity and provisioning details of a datacenter's datastores
    ListDatastores {
        /// Datacenter name (defaults to the first datacenter found)
        #[arg(long)]
        datacenter_name: Option<String>,
    },

    /// List storage requirement policies
    ListStoragePolicies,
}
