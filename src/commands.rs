use std::path::Path;

use anyhow::Context as _;

use crate::catalog::CatalogStore;
use crate::cli::{AddArgs, Cli, Command, ListArgs, RemoveArgs, SortArgs};
use crate::filter::Filter;
use crate::record::{BookRecord, DEFAULT_IMAGE_URL};
use crate::render::{render_html, render_text};
use crate::storage::LocalFsStore;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.resolve_data_dir();
    tracing::debug!(data_dir = %data_dir.display(), "opening catalog");
    let mut store = open(&data_dir)?;

    match cli.command {
        Command::Add(args) => add(&mut store, args).context("add")?,
        Command::Remove(args) => remove(&mut store, args).context("remove")?,
        Command::List(args) => list(&mut store, args).context("list")?,
        Command::Sort(args) => sort(&mut store, args).context("sort")?,
        Command::Categories => {
            for category in store.categories() {
                println!("{category}");
            }
        }
    }

    store.dispose();
    Ok(())
}

fn open(data_dir: &Path) -> anyhow::Result<CatalogStore<LocalFsStore>> {
    let mut store = CatalogStore::new(LocalFsStore::new(data_dir));
    store
        .load()
        .with_context(|| format!("load catalog from {}", data_dir.display()))?;
    Ok(store)
}

fn add(store: &mut CatalogStore<LocalFsStore>, args: AddArgs) -> anyhow::Result<()> {
    let Some(record) = store.add(&args.title, &args.author, &args.category)? else {
        anyhow::bail!("title and author must not be blank");
    };
    println!("added: {}", record.title);
    Ok(())
}

fn remove(store: &mut CatalogStore<LocalFsStore>, args: RemoveArgs) -> anyhow::Result<()> {
    let record = BookRecord {
        title: args.title,
        author: args.author,
        category: args.category,
        image_url: args.image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_owned()),
    };
    if !store.remove(&record)? {
        anyhow::bail!("no book matches {:?} by {:?}", record.title, record.author);
    }
    println!("removed: {}", record.title);
    Ok(())
}

fn list(store: &mut CatalogStore<LocalFsStore>, args: ListArgs) -> anyhow::Result<()> {
    let Ok(filter) = args.filter.parse::<Filter>();
    store.set_filter(filter);

    let view = store.view();
    let out = if args.html {
        render_html(&view)?
    } else {
        render_text(&view)?
    };
    print!("{out}");
    Ok(())
}

fn sort(store: &mut CatalogStore<LocalFsStore>, args: SortArgs) -> anyhow::Result<()> {
    store.sort(args.order.into())?;
    print!("{}", render_text(&store.view())?);
    Ok(())
}
