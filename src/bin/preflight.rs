use people_registry::infra::{Config, HttpEnricher};
use people_registry::PgPersonRepository;
use people_registry::PersonRepository;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--skip-enrichment]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           SERVER_PORT, DB_MAX_CONNECTIONS, AGIFY_URL, GENDERIZE_URL,\n\
           NATIONALIZE_URL, ENRICH_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let skip_enrichment = args.iter().any(|a| a == "--skip-enrichment");

    // Config errors come back as one aggregated report.
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  SERVER_PORT={}", config.server_port);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);
    println!("  AGIFY_URL={}", config.enrich.agify_url);
    println!("  GENDERIZE_URL={}", config.enrich.genderize_url);
    println!("  NATIONALIZE_URL={}", config.enrich.nationalize_url);

    let repo = PgPersonRepository::connect(&config.database_url, 1)
        .await
        .map_err(|e| anyhow::anyhow!("Database not reachable: {}", e))?;
    repo.ping().await?;
    println!("  Database reachable, `people` table present.");

    if skip_enrichment {
        println!("  Enrichment APIs skipped.");
    } else {
        let enricher = HttpEnricher::new(config.enrich.clone())?;
        enricher
            .probe()
            .await
            .map_err(|e| anyhow::anyhow!("Enrichment API check failed: {}", e))?;
        println!("  Enrichment APIs answered.");
    }

    println!("> Preflight OK.");
    Ok(())
}
