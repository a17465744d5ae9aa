use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scour::search::utils::DEFAULT_EXCERPT_CONTEXT;
use scour::{
    build_index, filter_by_score, format_excerpt, highlight, search, Config, ContentCollection,
    Effect, Error, Event, FieldKey, IndexCache, MatchSpan, SearchResult, SearchSession, Segment,
};

mod cli;
use cli::display::*;
use cli::{parse_palette_line, Cli, Commands, PaletteInput};

/// Excerpts longer than this are cut around the first match.
const EXCERPT_INLINE: usize = 2 * DEFAULT_EXCERPT_CONTEXT;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCOUR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> scour::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Search {
            file,
            query,
            locale,
            limit,
            cutoff,
            json,
        } => {
            let limit = limit.unwrap_or(config.search.limit);
            run_search(&config, &file, &query, &locale, limit, cutoff, json)
        }
        Commands::Inspect { file, locale } => run_inspect(&config, &file, locale),
        Commands::Palette { file, locale } => run_palette(&config, &file, locale),
    }
}

fn load_posts(file: &Path) -> scour::Result<ContentCollection> {
    let collection = ContentCollection::load(file)?;
    if let Err(e) = collection.validate() {
        tracing::warn!(error = %e, "posts collection has problems");
    }
    Ok(collection)
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    slug: &'a str,
    path: String,
    score: f64,
    title: Vec<Segment>,
    excerpt: Option<Vec<Segment>>,
    matches: &'a [MatchSpan],
}

fn run_search(
    config: &Config,
    file: &Path,
    query: &str,
    locale: &str,
    limit: usize,
    cutoff: Option<f64>,
    json: bool,
) -> scour::Result<()> {
    let collection = load_posts(file)?;
    let index = build_index(&collection.for_locale(locale), &config.search);

    let mut results = search(&index, query, limit);
    if let Some(cutoff) = cutoff {
        results = filter_by_score(results, cutoff);
    }

    if json {
        print_json(locale, &results)
    } else {
        print_results(query, locale, &results);
        Ok(())
    }
}

fn print_json(locale: &str, results: &[SearchResult]) -> scour::Result<()> {
    let hits: Vec<JsonHit> = results
        .iter()
        .map(|r| JsonHit {
            slug: r.slug(),
            path: scour::Route::new(locale, r.slug()).path(),
            score: r.score,
            title: highlight(&r.record.title, &r.spans_for(FieldKey::Title)),
            excerpt: r
                .record
                .excerpt
                .as_deref()
                .map(|e| highlight(e, &r.spans_for(FieldKey::Excerpt))),
            matches: &r.matches,
        })
        .collect();
    let out = serde_json::to_string_pretty(&hits).map_err(|source| Error::Json {
        context: "search results".to_string(),
        source,
    })?;
    println!("{}", out);
    Ok(())
}

fn print_results(query: &str, locale: &str, results: &[SearchResult]) {
    let colors = use_colors();
    box_top(&format!("SEARCH \"{}\" · {}", query.trim(), locale));
    if results.is_empty() {
        println!("  {}", paint(Role::Muted, "No posts found"));
    }
    for (i, result) in results.iter().enumerate() {
        let title = highlight(&result.record.title, &result.spans_for(FieldKey::Title));
        println!(
            " {:>2}. {} {}",
            i + 1,
            pad_right(&highlighted(&title, colors), 56),
            score_value(result.score)
        );
        if let Some(excerpt) = &result.record.excerpt {
            println!("     {}", excerpt_line(excerpt, &result.spans_for(FieldKey::Excerpt), colors));
        }
        println!("     {}", meta_line(result));
        println!(
            "     {}",
            route_text(&scour::Route::new(locale, result.slug()).path())
        );
    }
    box_bottom();
}

fn excerpt_line(excerpt: &str, spans: &[MatchSpan], colors: bool) -> String {
    if spans.is_empty() || excerpt.chars().count() <= EXCERPT_INLINE {
        highlighted(&highlight(excerpt, spans), colors)
    } else {
        format_excerpt(excerpt, spans, DEFAULT_EXCERPT_CONTEXT / 2)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(config: &Config, file: &Path, locale: Option<String>) -> scour::Result<()> {
    let collection = load_posts(file)?;
    let locales = match locale {
        Some(locale) => vec![locale],
        None => collection.locales(),
    };

    let mut cache = IndexCache::new(config.search.clone());
    for locale in &locales {
        let index = cache.get_or_build(locale, &collection.for_locale(locale));
        box_top(&format!("INDEX {}", locale));
        box_row(&format!("  records      {:>6}", index.len()));
        box_row(&format!("  values       {:>6}", index.value_count()));
        for (key, count) in index.values_per_key() {
            let weight = index
                .keys()
                .iter()
                .find(|k| k.key == key)
                .map(|k| k.weight)
                .unwrap_or_default();
            box_row(&format!(
                "    {} {:>6}   weight {:.3}",
                pad_right(&paint(Role::Heading, key.as_str()), 10),
                count,
                weight
            ));
        }
        box_row(&format!("  fingerprint  0x{:08x}", index.fingerprint()));
        box_bottom();
    }
    if locales.is_empty() {
        println!("{}", paint(Role::Muted, "No published posts"));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

fn run_palette(config: &Config, file: &Path, locale: String) -> scour::Result<()> {
    let collection = load_posts(file)?;
    let mut cache = IndexCache::new(config.search.clone());
    let index = cache.get_or_build(&locale, &collection.for_locale(&locale));
    let mut session = SearchSession::new(index, locale, config.session.clone());

    let effects = session.handle(Event::Open);
    drive(&mut session, effects);
    print_palette(&session);

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        let effects = match parse_palette_line(&line) {
            PaletteInput::Event(event) => session.handle(event),
            PaletteInput::SwitchLocale(locale) => {
                let index = cache.get_or_build(&locale, &collection.for_locale(&locale));
                session.set_index(index, locale)
            }
        };
        drive(&mut session, effects);
        print_palette(&session);
    }
    Ok(())
}

/// Carry out effects, firing every scheduled timer straight away.
fn drive(session: &mut SearchSession, effects: Vec<Effect>) {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::ScheduleTimer { id, .. } => queue.extend(session.handle(Event::TimerFired(id))),
            Effect::CancelTimer(id) => tracing::trace!(timer = id.0, "timer cancelled"),
            Effect::Navigate(route) => println!("→ {}", route_text(&route.path())),
        }
    }
}

fn print_palette(session: &SearchSession) {
    if !session.phase().is_open() {
        println!("{}", paint(Role::Muted, "(palette closed)"));
        return;
    }
    let colors = use_colors();
    let state = session.state();
    println!("{} {}", paint(Role::Heading, ">"), state.query);
    if let Some(hint) = session.status() {
        println!("  {}", paint(Role::Muted, &status_text(hint)));
    }
    for (i, result) in session.results().iter().enumerate() {
        let marker = if state.focused() == Some(i) { "▸" } else { " " };
        let title = highlight(&result.record.title, &result.spans_for(FieldKey::Title));
        println!("{} {}", marker, highlighted(&title, colors));
    }
}
