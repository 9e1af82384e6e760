use anyhow::Context;

use crate::client::ClightClient;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the current backlight level, as a percentage
    Get,

    /// Set the backlight level on all displays to a percentage
    Set {
        #[clap(allow_negative_numbers = true)]
        value: i32,
    },

    /// Raise the backlight level by a percentage step
    Increase {
        #[clap(allow_negative_numbers = true)]
        value: i32,
    },

    /// Lower the backlight level by a percentage step
    Decrease {
        #[clap(allow_negative_numbers = true)]
        value: i32,
    },
}

impl Command {
    pub async fn run(&self, client: &mut ClightClient) -> anyhow::Result<()> {
        match *self {
            Self::Get => {
                let percent =
                    client.backlight().await.context("failed to read the backlight level")?;
                println!("{}", percent);
                Ok(())
            }
            Self::Set { value } => {
                client.set_backlight(value).await.context("failed to set the backlight level")
            }
            Self::Increase { value } => client
                .increase_backlight(value)
                .await
                .context("failed to raise the backlight level"),
            Self::Decrease { value } => client
                .decrease_backlight(value)
                .await
                .context("failed to lower the backlight level"),
        }
    }
}
