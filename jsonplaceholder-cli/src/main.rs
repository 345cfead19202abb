mod print;

use anyhow::Context;

#[derive(Debug, argh::FromArgs)]
#[argh(description = "fetch and display users from jsonplaceholder.typicode.com")]
struct Options {
    #[argh(
        option,
        short = 's',
        long = "starts-with",
        description = "only display users whose city starts with this prefix"
    )]
    starts_with: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let options = argh::from_env();
    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    tokio_rt.block_on(async_main(options))
}

async fn async_main(options: Options) -> anyhow::Result<()> {
    let client = jsonplaceholder::Client::new();

    let users = client.get_users().await.context("failed to get users")?;

    let stdout = std::io::stdout();
    print::write_users(
        &mut stdout.lock(),
        &users,
        options.starts_with.as_deref(),
    )
    .context("failed to write to stdout")?;

    Ok(())
}
