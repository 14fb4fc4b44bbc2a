//! Command implementations for the launch records CLI.
//!
//! Every view subcommand reads a launch CSV, loads it into the same in-memory
//! database the dashboard uses, and prints the result as JSON.

use clap::Subcommand;

pub mod fetch;
pub mod views;

/// Public copy of the dataset used by the course dashboard.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Download the launch CSV, validate it, and save it
    Fetch {
        /// Dataset URL
        #[arg(long, default_value = DEFAULT_DATASET_URL)]
        url: String,

        /// Output path for the validated CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Print the success pie chart view
    Pie {
        /// Path to the launch CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Site choice: ALL, OPT1..OPT4, or a site name
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,
    },

    /// Print the payload vs. outcome scatter chart view
    Scatter {
        /// Path to the launch CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Site choice: ALL, OPT1..OPT4, or a site name
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Exclusive lower payload bound in kg (defaults to the smallest payload)
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,

        /// Exclusive upper payload bound in kg (defaults to the largest payload)
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,
    },

    /// List site choices with launch and success counts
    Sites {
        /// Path to the launch CSV
        #[arg(short = 'c', long)]
        csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::Pie { csv, site } => {
            let db = views::load_database(&csv)?;
            println!("{}", views::pie_json(&db, &site)?);
            Ok(())
        }
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => {
            let db = views::load_database(&csv)?;
            println!("{}", views::scatter_json(&db, &site, low, high)?);
            Ok(())
        }
        Command::Sites { csv } => {
            let db = views::load_database(&csv)?;
            println!("{}", views::sites_json(&db)?);
            Ok(())
        }
    }
}
