use crate::CliContext;
use crate::dir_watcher;
use crate::render::{self, CLEAR_SCREEN, RenderOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tally_core::context::{
    AppConfigExt, LogFileIndex, LogFileMetaData, ParseResult, parse_file, resolve_log_path,
};
use tokio::time::sleep;

/// Outcome of one iteration of the live loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Rendered,
    Idle,
}

/// Live meter: reprocess the newest log whenever it grows and redraw.
pub async fn watch(ctx: &CliContext, opts: RenderOptions) -> Result<(), String> {
    let watcher = dir_watcher::init_watcher(ctx).await;
    ctx.tasks.lock().await.set_watcher(watcher);

    let (refresh, idle) = {
        let config = ctx.config.read().await;
        (
            Duration::from_millis(config.refresh_interval_ms),
            Duration::from_millis(config.idle_interval_ms),
        )
    };

    let mut last_seen: Option<(PathBuf, u64)> = None;
    loop {
        let watching = ctx.tasks.lock().await.is_watching();
        if !watching {
            rescan(ctx).await;
        }
        let pass = live_pass(ctx, &mut last_seen, opts).await;
        let pause = match pass {
            Pass::Rendered => refresh,
            Pass::Idle => idle,
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = sleep(pause) => {}
            _ = ctx.log_changed.notified(), if pass == Pass::Idle => {}
        }
    }

    ctx.tasks.lock().await.abort_all();
    tracing::info!("Live meter stopped");
    Ok(())
}

async fn rescan(ctx: &CliContext) {
    let dir = ctx.log_directory().await;
    match LogFileIndex::build_index(&dir) {
        Ok(index) => *ctx.file_index.write().await = index,
        Err(e) => tracing::warn!(error = %e, "Failed to rescan log directory"),
    }
}

async fn live_pass(
    ctx: &CliContext,
    last_seen: &mut Option<(PathBuf, u64)>,
    opts: RenderOptions,
) -> Pass {
    let Some(path) = ctx.newest_log().await else {
        if last_seen.take().is_some() {
            ctx.session.write().await.reset();
        }
        draw(&render::render(&tally_core::Leaderboard::NotReady, None, None, opts));
        return Pass::Idle;
    };

    let Some(size) = LogFileMetaData::from_path(&path).map(|m| m.file_size) else {
        tracing::warn!(path = %path.display(), "Combat log vanished before reading");
        return Pass::Idle;
    };
    if last_seen.as_ref() == Some(&(path.clone(), size)) {
        return Pass::Idle;
    }

    {
        let mut session = ctx.session.write().await;
        if session.active_file.as_deref() != Some(path.as_path()) {
            session.set_active_file(path.clone());
        }
    }

    if let Err(e) = parse_file(ctx.session.clone()).await {
        tracing::warn!(error = %e, "Failed to read combat log");
        return Pass::Idle;
    }

    let screen = {
        let session = ctx.session.read().await;
        let zone = session.session_cache().current_zone.zone_name.clone();
        render::render(&session.snapshot(), Some(&zone), Some(&path), opts)
    };
    draw(&screen);

    *last_seen = Some((path, size));
    Pass::Rendered
}

fn draw(screen: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{CLEAR_SCREEN}{screen}");
    let _ = stdout.flush();
}

/// One full pass over a single file and one report.
pub async fn parse(path: &str, ctx: &CliContext, opts: RenderOptions) -> Result<(), String> {
    let path = {
        let config = ctx.config.read().await;
        resolve_log_path(&config, Path::new(path))
    };
    if !path.is_file() {
        return Err(format!("No such log file: {}", path.display()));
    }

    ctx.session.write().await.set_active_file(path.clone());
    let result: ParseResult = parse_file(ctx.session.clone())
        .await
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;

    let session = ctx.session.read().await;
    let zone = session.session_cache().current_zone.zone_name.clone();
    print!(
        "{}",
        render::render(&session.snapshot(), Some(&zone), Some(&path), opts)
    );
    println!(
        "\nparsed {} records ({} skipped) in {}ms",
        result.records_applied, result.skipped, result.elapsed_ms
    );
    Ok(())
}

pub async fn show_settings(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    match tally_core::context::AppConfig::config_path() {
        Ok(path) => println!("Config file:      {}", path.display()),
        Err(e) => println!("Config file:      unavailable ({e})"),
    }
    println!("Log directory:    {}", config.log_directory);
    println!(
        "Rest zones:       {}",
        if config.rest_zones.is_empty() {
            "(none)".to_string()
        } else {
            config.rest_zones.join(", ")
        }
    );
    println!("Refresh interval: {}ms", config.refresh_interval_ms);
    println!("Idle interval:    {}ms", config.idle_interval_ms);
    match config.default_year {
        Some(year) => println!("Default year:     {year}"),
        None => println!("Default year:     (current)"),
    }
    println!("Log format:       {:?}", config.log_format);
    Ok(())
}

pub async fn list_files(ctx: &CliContext) -> Result<(), String> {
    let dir = ctx.log_directory().await;
    let index = LogFileIndex::build_index(&dir).map_err(|e| e.to_string())?;

    if index.is_empty() {
        println!("No combat logs found in {}", dir.display());
        return Ok(());
    }

    println!("{:<50} {:<18} {:>10}", "File", "Modified", "Size");
    println!("{}", "-".repeat(80));
    for entry in index.entries() {
        let empty_marker = if entry.is_empty() { " (empty)" } else { "" };
        println!(
            "{:<50} {:<18} {:>10}{}",
            entry.filename,
            entry.formatted_datetime(),
            format_size(entry.file_size),
            empty_marker
        );
    }
    println!(
        "\nTotal: {} files, {}",
        index.len(),
        format_size(index.total_size())
    );
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    if bytes as f64 >= MB {
        format!("{:.1} MB", bytes as f64 / MB)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

pub async fn set_directory(new_directory: &str, ctx: &CliContext) -> Result<(), String> {
    let filepath = PathBuf::from(new_directory);
    if !filepath.is_dir() {
        return Err("Update failed. Invalid directory name given.".to_string());
    }

    let mut config = ctx.config.write().await;
    if new_directory == config.log_directory {
        println!("Log directory already configured to {}", new_directory);
        return Ok(());
    }
    config.log_directory = new_directory.to_string();
    config.save().map_err(|e| e.to_string())?;
    tracing::info!(dir = new_directory, "Log directory updated");
    println!("Log directory set to {}", new_directory);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "0.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
