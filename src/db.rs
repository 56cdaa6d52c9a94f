use std::io;

use log::{debug, info};
use mysql::prelude::Queryable;
use mysql::{Conn, LocalInfileHandler, Opts, OptsBuilder};

use crate::config::LoadConfig;
use crate::error::LoadError;
use crate::stream;

/// Builds the statement text for one load run.
///
/// Fixed template: the empty-string pseudo-filename routes the driver to the
/// registered infile handler, and the table name is passed through verbatim
/// (trusted operator input, no quoting).
pub fn load_statement(table: &str, replace: bool) -> String {
    let conflict = if replace { "REPLACE" } else { "IGNORE" };
    format!("LOAD DATA LOCAL INFILE '' {conflict} INTO TABLE {table}")
}

/// Maps the configuration onto driver connection options. Absent fields are
/// handed through as `None` so the driver resolves its own defaults; port 0
/// leaves the driver's default port untouched.
fn connection_opts(config: &LoadConfig) -> Opts {
    let mut builder = OptsBuilder::new()
        .ip_or_hostname(config.hostname.clone())
        .user(config.username.clone())
        .pass(config.password.clone())
        .db_name(config.database.clone());
    if config.port != 0 {
        builder = builder.tcp_port(config.port);
    }
    Opts::from(builder)
}

/// The infile handler the driver invokes while executing the statement:
/// streams standard input into the driver's infile sink until end-of-stream.
/// The filename argument is ignored; the statement always names the
/// empty-string pseudo-file.
fn stdin_infile_handler() -> LocalInfileHandler {
    LocalInfileHandler::new(|_file_name, writer| {
        let stdin = io::stdin();
        let mut source = stdin.lock();
        match stream::relay(&mut source, writer) {
            Ok(total) => {
                debug!("streamed {total} bytes from stdin into the load");
                Ok(())
            }
            Err(e) => {
                eprintln!("Error reading standard input: {e}");
                Err(e)
            }
        }
    })
}

/// Runs the whole load: connect, register the stdin handler, execute, report.
///
/// The statement text is echoed to stdout before it is sent, and on success
/// the server's status line (or an affected-row count when the server sends
/// none) follows it. Every failure is terminal; the connection is closed on
/// all paths when the handle drops.
pub fn run_load(config: &LoadConfig) -> Result<(), LoadError> {
    let opts = connection_opts(config);
    info!("opening connection");
    let mut conn = Conn::new(opts).map_err(LoadError::Connect)?;
    info!("connected, registering stdin infile handler");
    conn.set_local_infile_handler(Some(stdin_infile_handler()));

    let statement = load_statement(&config.table, config.replace);
    println!("{statement}");
    debug!("executing load statement");

    let result = conn.query_iter(statement.as_str()).map_err(LoadError::Execute)?;
    let affected = result.affected_rows();
    let summary = result.info_str().into_owned();
    drop(result);
    info!("load complete, {affected} rows affected");

    if summary.is_empty() {
        println!("Rows affected: {affected}");
    } else {
        println!("{summary}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> LoadConfig {
        LoadConfig::try_parse_from(std::iter::once("mysql-stdin-load").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_statement_ignore_mode() {
        assert_eq!(
            load_statement("orders", false),
            "LOAD DATA LOCAL INFILE '' IGNORE INTO TABLE orders"
        );
    }

    #[test]
    fn test_statement_replace_mode() {
        assert_eq!(
            load_statement("orders", true),
            "LOAD DATA LOCAL INFILE '' REPLACE INTO TABLE orders"
        );
    }

    #[test]
    fn test_statement_table_name_is_verbatim() {
        assert_eq!(
            load_statement("warehouse.stock_2024", false),
            "LOAD DATA LOCAL INFILE '' IGNORE INTO TABLE warehouse.stock_2024"
        );
    }

    #[test]
    fn test_opts_delegate_absent_fields_to_driver_defaults() {
        let opts = connection_opts(&config(&["--table", "orders"]));
        assert_eq!(opts.get_user(), None);
        assert_eq!(opts.get_db_name(), None);
        assert_eq!(opts.get_tcp_port(), 3306);
    }

    #[test]
    fn test_opts_carry_explicit_fields() {
        let opts = connection_opts(&config(&[
            "-u", "alice", "-p", "secret", "-d", "shop", "-H", "db.example.com", "-P", "3307",
            "-t", "orders",
        ]));
        assert_eq!(opts.get_user(), Some("alice"));
        assert_eq!(opts.get_pass(), Some("secret"));
        assert_eq!(opts.get_db_name(), Some("shop"));
        assert_eq!(opts.get_ip_or_hostname(), "db.example.com");
        assert_eq!(opts.get_tcp_port(), 3307);
    }

    #[test]
    fn test_port_zero_keeps_driver_default() {
        let opts = connection_opts(&config(&["--table", "orders", "--port", "0"]));
        assert_eq!(opts.get_tcp_port(), 3306);
    }
}
