use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub seed: Option<PathBuf>,
    pub strict_references: bool,
    pub print_schema: bool,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Config {
            host: matches.get_one::<IpAddr>("host").copied().unwrap_or(DEFAULT_HOST),
            port: matches.get_one::<u16>("port").copied().unwrap_or(DEFAULT_PORT),
            seed: matches.get_one::<PathBuf>("seed").cloned(),
            strict_references: matches.get_flag("strict-references"),
            print_schema: matches.get_flag("print-schema"),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn command() -> Command {
    Command::new("storefront-graphql-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("GraphQL API for the storefront admin over an in-memory store.")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help(format!("Port to listen on [default: {}].", DEFAULT_PORT))
                .value_parser(value_parser!(u16))
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("ADDR")
                .help(format!("Address to bind [default: {}].", DEFAULT_HOST))
                .value_parser(value_parser!(IpAddr))
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("FILE")
                .help("JSON file with users, products and orders to start from.")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("strict-references")
                .long("strict-references")
                .help("Reject orders that reference unknown users or products.")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("print-schema")
                .long("print-schema")
                .help("Print the schema in SDL and exit.")
                .action(ArgAction::SetTrue)
        )
}

pub fn parse_arguments() -> Config {
    Config::from_matches(&command().get_matches())
}
