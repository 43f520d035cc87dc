use std::time::Duration;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use hwnd_pilot_core::clipboard::TextEncoding;
use hwnd_pilot_core::events;
use hwnd_pilot_core::{
    InputTiming, NativePlatform, PilotConfig, PilotError, Point, RectUpdate, WindowHandle,
    WindowId, WindowRect, native_platform, parse_key, parse_keys,
};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn run_command(matches: &ArgMatches) -> CommandResult {
    events::log_app_startup();

    let config = match PilotConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            error!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match matches.subcommand() {
        Some(("rect", sub_matches)) => handle_rect_command(sub_matches, &config),
        Some(("move", sub_matches)) => handle_move_command(sub_matches, &config),
        Some((name @ ("show" | "hide" | "min" | "max" | "front"), sub_matches)) => {
            handle_visibility_command(name, sub_matches, &config)
        }
        Some(("cursor", sub_matches)) => handle_cursor_command(sub_matches, &config),
        Some(("click", sub_matches)) => handle_click_command(sub_matches, &config),
        Some(("drag", sub_matches)) => handle_drag_command(sub_matches, &config),
        Some(("wheel", sub_matches)) => handle_wheel_command(sub_matches, &config),
        Some(("key", sub_matches)) => handle_key_command(sub_matches, &config),
        Some(("chord", sub_matches)) => handle_chord_command(sub_matches, &config),
        Some(("clip", sub_matches)) => handle_clip_command(sub_matches, &config),
        Some(("config", sub_matches)) => handle_config_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

#[derive(Debug, Serialize)]
struct RectReport {
    window: String,
    rect: WindowRect,
}

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    drag_pause_ms: u64,
    click_pause_ms: u64,
    encoding: &'static str,
}

/// Locate the target window with the timing from config.
fn open_window(
    matches: &ArgMatches,
    timing: InputTiming,
) -> Result<WindowHandle<NativePlatform>, Box<dyn std::error::Error>> {
    let class_name = matches.get_one::<String>("class").map(String::as_str);
    let title = matches.get_one::<String>("title").map(String::as_str);

    if class_name.is_none() && title.is_none() {
        return Err("At least one of --class or --title is required".into());
    }

    let platform = native_platform().inspect_err(|e| {
        eprintln!("Error: {}", e);
        error!(event = "cli.platform_unavailable", error = %e);
        events::log_app_error(e);
    })?;

    match WindowHandle::find(platform, class_name, title) {
        Ok(handle) => Ok(handle.with_timing(timing)),
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.window_lookup_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn report_failure<E: PilotError>(what: &str, e: E) -> Box<dyn std::error::Error> {
    eprintln!("{} failed: {}", what, e);
    events::log_operation_failed(what, &e);
    Box::new(e)
}

fn timing_with_pause(matches: &ArgMatches, config: &PilotConfig, drag: bool) -> InputTiming {
    let mut timing = config.timing();
    if let Some(ms) = matches.get_one::<u64>("pause-ms") {
        if drag {
            timing.drag_pause = Duration::from_millis(*ms);
        } else {
            timing.click_pause = Duration::from_millis(*ms);
        }
    }
    timing
}

fn handle_rect_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let json_output = matches.get_flag("json");
    info!(event = "cli.rect_started", json_output = json_output);

    let handle = open_window(matches, config.timing())?;
    let rect = handle.rect();

    if json_output {
        let report = RectReport {
            window: handle.id().to_string(),
            rect,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_rect(handle.id(), rect);
    }

    info!(event = "cli.rect_completed", window = %handle.id());
    Ok(())
}

fn print_rect(window: WindowId, rect: WindowRect) {
    println!("Window {}", window);
    println!("  Position: ({}, {})", rect.left, rect.top);
    println!("  Size:     {}x{}", rect.width, rect.height);
}

fn handle_move_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let rect_str = matches
        .get_one::<String>("rect")
        .ok_or("Rectangle is required")?;
    let update: RectUpdate = rect_str.parse().map_err(|e| report_failure("Move", e))?;
    let repaint = matches.get_flag("repaint");
    let place = matches.get_one::<String>("place").map(String::as_str);

    info!(
        event = "cli.move_started",
        update = ?update,
        repaint = repaint,
        place = ?place
    );

    let mut handle = open_window(matches, config.timing())?;

    let result = match place {
        None => handle.reposition(update, repaint),
        Some("show") => handle
            .show()
            .and_then(|_| handle.reposition(update, repaint)),
        Some("min") => handle.change_position(update, repaint, true),
        Some(_) => handle.change_position(update, repaint, false),
    };

    match result {
        Ok(()) => {
            print_rect(handle.id(), handle.rect());
            info!(event = "cli.move_completed", window = %handle.id());
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.move_failed", error = %e);
            Err(report_failure("Move", e))
        }
    }
}

fn handle_visibility_command(
    name: &str,
    matches: &ArgMatches,
    config: &PilotConfig,
) -> CommandResult {
    info!(event = "cli.visibility_started", command = name);

    let handle = open_window(matches, config.timing())?;
    let result = match name {
        "show" => handle.show(),
        "hide" => handle.hide(),
        "min" => handle.minimize(),
        "max" => handle.maximize(),
        _ => handle.set_foreground(),
    };

    match result {
        Ok(()) => {
            info!(event = "cli.visibility_completed", command = name);
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.visibility_failed", command = name, error = %e);
            Err(report_failure(name, e))
        }
    }
}

fn handle_cursor_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let json_output = matches.get_flag("json");
    let target = matches
        .get_one::<String>("set")
        .map(|s| parse_point(s))
        .transpose()?;

    info!(event = "cli.cursor_started", target = ?target);

    let handle = open_window(matches, config.timing())?;
    if let Some(point) = target {
        handle
            .set_cursor_position(point)
            .map_err(|e| report_failure("Set cursor", e))?;
    }

    let position = handle
        .cursor_position()
        .map_err(|e| report_failure("Cursor query", e))?;
    if json_output {
        println!("{}", serde_json::to_string_pretty(&position)?);
    } else {
        println!("Cursor at ({}, {})", position.x, position.y);
    }

    info!(
        event = "cli.cursor_completed",
        x = position.x,
        y = position.y
    );
    Ok(())
}

fn handle_click_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let at = parse_point(matches.get_one::<String>("at").ok_or("Point is required")?)?;
    let right = matches.get_flag("right");

    info!(event = "cli.click_started", x = at.x, y = at.y, right = right);

    let handle = open_window(matches, timing_with_pause(matches, config, false))?;
    let result = if right {
        handle.right_click(at)
    } else {
        handle.left_click(at)
    };

    match result {
        Ok(()) => {
            println!("Clicked at ({}, {})", at.x, at.y);
            info!(event = "cli.click_completed", x = at.x, y = at.y);
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.click_failed", error = %e);
            Err(report_failure("Click", e))
        }
    }
}

fn handle_drag_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let from = parse_point(matches.get_one::<String>("from").ok_or("Start is required")?)?;
    let to = parse_point(matches.get_one::<String>("to").ok_or("End is required")?)?;

    info!(event = "cli.drag_started", from = ?from, to = ?to);

    let handle = open_window(matches, timing_with_pause(matches, config, true))?;
    match handle.left_drag(from, to) {
        Ok(()) => {
            println!(
                "Dragged from ({}, {}) to ({}, {})",
                from.x, from.y, to.x, to.y
            );
            info!(event = "cli.drag_completed");
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.drag_failed", error = %e);
            Err(report_failure("Drag", e))
        }
    }
}

fn handle_wheel_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let at = parse_point(matches.get_one::<String>("at").ok_or("Point is required")?)?;
    let up = matches.get_flag("up");

    info!(event = "cli.wheel_started", x = at.x, y = at.y, up = up);

    let handle = open_window(matches, config.timing())?;
    let result = if up {
        handle.wheel_up(at)
    } else {
        handle.wheel_down(at)
    };

    match result {
        Ok(()) => {
            info!(event = "cli.wheel_completed");
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.wheel_failed", error = %e);
            Err(report_failure("Wheel", e))
        }
    }
}

fn handle_key_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let names: Vec<&String> = matches
        .get_many::<String>("keys")
        .ok_or("At least one key is required")?
        .collect();
    let keys = names
        .iter()
        .map(|name| parse_key(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| report_failure("Key press", e))?;

    info!(event = "cli.key_started", count = keys.len());

    let handle = open_window(matches, config.timing())?;
    match handle.press_keys(&keys) {
        Ok(()) => {
            info!(event = "cli.key_completed", count = keys.len());
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.key_failed", error = %e);
            Err(report_failure("Key press", e))
        }
    }
}

fn handle_chord_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let combo = matches
        .get_one::<String>("combo")
        .ok_or("Key combination is required")?;
    let keys = parse_keys(combo).map_err(|e| report_failure("Chord", e))?;

    info!(event = "cli.chord_started", combo = %combo);

    let handle = open_window(matches, config.timing())?;
    match handle.press_chord(&keys) {
        Ok(()) => {
            info!(event = "cli.chord_completed", combo = %combo);
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.chord_failed", error = %e);
            Err(report_failure("Chord", e))
        }
    }
}

fn handle_clip_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    match matches.subcommand() {
        Some(("get", sub_matches)) => handle_clip_get(sub_matches, config),
        Some(("set", sub_matches)) => handle_clip_set(sub_matches, config),
        _ => {
            error!(event = "cli.clip_subcommand_unknown");
            Err("Unknown clip subcommand".into())
        }
    }
}

/// `--encoding` wins over the configured encoding.
fn resolve_encoding(
    matches: &ArgMatches,
    config: &PilotConfig,
) -> Result<TextEncoding, Box<dyn std::error::Error>> {
    match matches.get_one::<String>("encoding") {
        Some(label) => Ok(TextEncoding::from_label(label)?),
        None => Ok(config.encoding()?),
    }
}

fn handle_clip_get(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let json_output = matches.get_flag("json");
    let encoding = resolve_encoding(matches, config)?;

    info!(event = "cli.clip_get_started", encoding = %encoding);

    let handle = open_window(matches, config.timing())?;
    match handle.clipboard_text(encoding) {
        Ok(text) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&text)?);
            } else {
                println!("{}", text);
            }
            info!(event = "cli.clip_get_completed", chars = text.chars().count());
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.clip_get_failed", error = %e);
            Err(report_failure("Clipboard read", e))
        }
    }
}

fn handle_clip_set(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let text = matches.get_one::<String>("text").ok_or("Text is required")?;
    let encoding = resolve_encoding(matches, config)?;

    info!(event = "cli.clip_set_started", encoding = %encoding);

    let handle = open_window(matches, config.timing())?;
    match handle.set_clipboard_text(text, encoding) {
        Ok(()) => {
            info!(event = "cli.clip_set_completed", chars = text.chars().count());
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.clip_set_failed", error = %e);
            Err(report_failure("Clipboard write", e))
        }
    }
}

fn handle_config_command(matches: &ArgMatches, config: &PilotConfig) -> CommandResult {
    let json_output = matches.get_flag("json");
    let effective = EffectiveConfig {
        drag_pause_ms: config.timing.drag_pause_ms(),
        click_pause_ms: config.timing.click_pause_ms(),
        encoding: config.encoding()?.name(),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&effective)?);
    } else {
        println!("[timing]");
        println!("drag_pause_ms = {}", effective.drag_pause_ms);
        println!("click_pause_ms = {}", effective.click_pause_ms);
        println!();
        println!("[clipboard]");
        println!("encoding = \"{}\"", effective.encoding);
    }

    info!(event = "cli.config_completed");
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("Point format must be x,y (e.g., \"100,50\"), got: '{}'", s).into());
    }
    let x: i32 = parts[0].trim().parse().map_err(|e| {
        format!(
            "Invalid x coordinate '{}': {} (expected integer)",
            parts[0].trim(),
            e
        )
    })?;
    let y: i32 = parts[1].trim().parse().map_err(|e| {
        format!(
            "Invalid y coordinate '{}': {} (expected integer)",
            parts[1].trim(),
            e
        )
    })?;
    Ok(Point::new(x, y))
}
