use clap::Parser;
use lingvanex_sdk::Client;

/// Translate a line of text with the Lingvanex API.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Text to translate
    text: String,
    /// Target language code, e.g. ru_RU
    #[arg(short, long, default_value = "ru_RU")]
    to: String,
    /// Source language code; auto-detected when omitted
    #[arg(short, long)]
    from: Option<String>,
    /// API key, created at https://lingvanex.com/account
    #[arg(long, env = "LINGVANEX_API_KEY", hide_env_values = true)]
    api_key: String,
    /// List the supported languages and exit
    #[arg(short, long)]
    list_languages: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = Client::builder().api_key(args.api_key).build();

    if args.list_languages {
        let languages = client.get_languages().build().send().await?;
        for lang in &languages {
            println!("{:<10} {}", lang.full_code, lang.english_name);
        }
        return Ok(());
    }

    let res = client
        .translate()
        .maybe_from(args.from.as_deref())
        .to(&args.to)
        .data(&args.text)
        .build()
        .send()
        .await?;

    println!("{} ({}) -> {}", res.source, res.from, res.result);
    if !res.target_transliteration.is_empty() {
        println!("transliteration: {}", res.target_transliteration);
    }

    Ok(())
}
