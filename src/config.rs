use clap::Parser;

/// Rejects an empty table name at parse time so the failure surfaces as a
/// normal CLI diagnostic instead of a server error.
fn non_empty_table(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("table name must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Options for a single bulk-load run, immutable once parsed.
///
/// Every connection field is optional; an absent field delegates to the
/// driver's own default resolution rather than a hardcoded substitute.
/// A port of 0 likewise means "use the driver default".
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mysql-stdin-load",
    about = "Bulk-load standard input into a MySQL table via LOAD DATA LOCAL INFILE"
)]
pub struct LoadConfig {
    /// Connection username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Connection password
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Database (schema) name
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// Server host
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Server port (0 selects the driver default)
    #[arg(short = 'P', long, default_value_t = 0)]
    pub port: u16,

    /// Target table name
    #[arg(short = 't', long, value_parser = non_empty_table)]
    pub table: String,

    /// REPLACE rows on key collisions instead of IGNORE-ing the incoming row
    #[arg(short = 'r', long)]
    pub replace: bool,
}
