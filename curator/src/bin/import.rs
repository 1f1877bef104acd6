use std::{fs, path::PathBuf};

use clap::Parser;

use curator::{
    import::{merge_handles, parse_export},
    store::FollowerStore,
};

/// Merge a follower export file into the local store without the server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the exported JSON document.
    export: PathBuf,

    /// Store file to merge into.
    #[arg(long, default_value = "data/followers.json")]
    store: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = fs::read(&args.export)?;
    let handles = parse_export(&raw)?;

    let store = FollowerStore::new(args.store);
    let mut records = store.load()?;
    println!("Loaded followers: {}", records.len());

    let added = merge_handles(&mut records, handles);
    store.save(&records)?;

    println!("New followers: {added}");
    println!("Total followers: {}", records.len());

    Ok(())
}
