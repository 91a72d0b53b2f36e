use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
    Validate,
}
