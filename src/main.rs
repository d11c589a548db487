// Driver binary - the excluded retrieval/export collaborator
// Consumes a pre-fetched raw-documents JSON file (endpoint name → payload)
// plus an optional score-override file, runs the core normalization, and
// writes the canonical JSON next to CSV exports. All fatal failures live
// here; the core itself cannot fail.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use credit_normalizer::{normalize, Account, Bureau, RawDocuments, ScoreOverrides};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: credit-normalizer <raw.json> [scores.json] [output_dir]");
        std::process::exit(1);
    }

    let raw_path = Path::new(&args[1]);
    let scores_path = args.get(2).map(PathBuf::from);
    let out_dir = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    // 1. Load raw documents
    println!("📂 Loading raw documents from {}...", raw_path.display());
    let raw = load_raw_documents(raw_path)?;
    println!("✓ Loaded {} endpoint payload(s)", raw.len());

    // 2. Load score overrides, if supplied
    let overrides = match &scores_path {
        Some(path) => {
            println!("📂 Loading score overrides from {}...", path.display());
            load_score_overrides(path)?
        }
        None => ScoreOverrides::new(),
    };

    // 3. Normalize
    println!("\n🔀 Normalizing...");
    let report = normalize(&raw, &overrides);
    println!(
        "✓ {} accounts, {} inquiries, {} public records, {} employers, {} scores",
        report.accounts.len(),
        report.inquiries.len(),
        report.public_records.len(),
        report.employers.len(),
        report.scores.len()
    );

    // 4. Write outputs
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let normalized_path = out_dir.join("normalized.json");
    fs::write(&normalized_path, serde_json::to_string_pretty(&report)?)?;
    println!("\n💾 Saved normalized JSON to {}", normalized_path.display());

    if !report.accounts.is_empty() {
        let accounts_path = out_dir.join("accounts.csv");
        write_accounts_csv(&accounts_path, &report.accounts)?;
        println!(
            "📊 Wrote {} with {} accounts",
            accounts_path.display(),
            report.accounts.len()
        );
    } else {
        println!("⚠️ No accounts found to export");
    }

    if !report.scores.is_empty() {
        let scores_csv_path = out_dir.join("scores.csv");
        write_scores_csv(&scores_csv_path, &report.scores)?;
        println!("📊 Wrote {}", scores_csv_path.display());
    } else {
        println!("⚠️ No scores found");
    }

    Ok(())
}

fn load_raw_documents(path: &Path) -> Result<RawDocuments> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;

    value
        .as_object()
        .cloned()
        .context("Raw documents file must be a JSON object keyed by endpoint name")
}

fn load_score_overrides(path: &Path) -> Result<ScoreOverrides> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let object = value
        .as_object()
        .context("Score override file must be a JSON object keyed by bureau name")?;

    let mut overrides = ScoreOverrides::new();
    for (key, score) in object {
        match Bureau::from_name(key) {
            Some(bureau) => {
                if let Some(score) = credit_normalizer::coerce::as_text(score) {
                    overrides.insert(bureau, score);
                }
            }
            None => eprintln!("⚠️ Unknown bureau {:?} in override file, skipping", key),
        }
    }
    Ok(overrides)
}

fn write_accounts_csv(path: &Path, accounts: &[Account]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writer.write_record([
        "institution",
        "account_type",
        "status",
        "balance",
        "credit_limit",
        "high_balance",
        "open_date",
        "closed_date",
        "account_number",
        "bureau",
        "last_reported",
    ])?;

    for account in accounts {
        writer.write_record([
            text(&account.provider.institution.name),
            text(&account.legacy.account_type),
            text(&account.legacy.status),
            amount(account.legacy.balance),
            amount(account.legacy.credit_limit),
            amount(account.legacy.high_balance),
            text(&account.legacy.open_date),
            text(&account.legacy.closed_date),
            text(&account.legacy.account_number),
            text(&account.provider.bureau),
            text(&account.legacy.last_reported),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_scores_csv(path: &Path, scores: &credit_normalizer::ScoreSet) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers: Vec<&str> = scores.keys().map(|b| b.description()).collect();
    writer.write_record(&headers)?;

    let row: Vec<String> = scores.values().cloned().collect();
    writer.write_record(&row)?;

    writer.flush()?;
    Ok(())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| format!("{}", v)).unwrap_or_default()
}
