use std::sync::Arc;

use anyhow::Context;
use restaurant_finder::config::ClientConfig;
use restaurant_finder::presenter::{MapPresenter, RestaurantDetailsPresenter, RestaurantsPresenter};
use restaurant_finder::repository::RestaurantRepository;

mod views;

const USAGE: &str = "Usage: restaurants <list | search [query...] | show <id> | map>";

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Search(String),
    Show(String),
    Map,
}

impl Command {
    fn new(args: &[String]) -> Result<Self, &'static str> {
        let Some(action) = args.first() else {
            return Err("too less argument");
        };

        match action.as_str() {
            "list" => Ok(Self::List),
            "search" => Ok(Self::Search(args[1..].join(" "))),
            "show" => match args.get(1) {
                Some(id) => Ok(Self::Show(id.clone())),
                None => Err("too less argument"),
            },
            "map" => Ok(Self::Map),
            _ => Err("unexpected action"),
        }
    }

    // consumed the command
    async fn run(self, repository: RestaurantRepository) -> anyhow::Result<()> {
        let done = match self {
            Self::List => {
                let view = Arc::new(views::TerminalListView::default());
                RestaurantsPresenter::new(view, repository).load_restaurants()
            }
            Self::Search(query) => {
                let view = Arc::new(views::TerminalListView::default());
                RestaurantsPresenter::new(view, repository).search_restaurants(&query)
            }
            Self::Show(id) => {
                let view = Arc::new(views::TerminalDetailsView);
                RestaurantDetailsPresenter::new(view, repository).load_restaurant(&id)
            }
            Self::Map => {
                let view = Arc::new(views::TerminalMapView);
                MapPresenter::new(view, repository).on_map_ready()
            }
        };
        done.await.context("request task panicked")?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = match Command::new(&args) {
        Ok(command) => command,
        Err(hint) => {
            eprintln!("{hint}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env()?;
    let repository =
        RestaurantRepository::from_config(&config).context("fail to set up restaurant client")?;
    command.run(repository).await
}
