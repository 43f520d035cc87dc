use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("hwnd-pilot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive a native window through its handle")
        .long_about(
            "hwnd-pilot finds a top-level window by class name and/or title, then moves, \
             resizes, shows or focuses it, sends mouse and keyboard messages to it, and \
             reads or writes clipboard text in a configurable encoding.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("class")
                .long("class")
                .short('c')
                .help("Window class name to match")
                .global(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .short('t')
                .help("Exact window title to match")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("rect")
                .about("Print the window's cached rectangle")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("move")
                .about("Move and/or resize the window")
                .arg(
                    Arg::new("rect")
                        .help("left,top,width,height; use _ to keep a value (e.g. \"10,_,800,_\")")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("repaint")
                        .long("repaint")
                        .help("Ask the window to repaint after moving")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("place")
                        .long("place")
                        .help("Show the window first, then leave it minimized or in front")
                        .value_parser(["show", "min", "front"]),
                ),
        )
        .subcommand(Command::new("show").about("Restore the window to its default state"))
        .subcommand(Command::new("hide").about("Hide the window"))
        .subcommand(Command::new("min").about("Minimize the window"))
        .subcommand(Command::new("max").about("Maximize the window"))
        .subcommand(Command::new("front").about("Bring the window to the foreground"))
        .subcommand(
            Command::new("cursor")
                .about("Print or set the screen cursor position")
                .arg(
                    Arg::new("set")
                        .long("set")
                        .help("Move the cursor to x,y")
                        .allow_hyphen_values(true),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("click")
                .about("Click at client coordinates")
                .arg(point_arg("at", "Client coordinates as x,y"))
                .arg(
                    Arg::new("right")
                        .long("right")
                        .help("Use the right mouse button")
                        .action(ArgAction::SetTrue),
                )
                .arg(pause_arg("Pause after the click in milliseconds")),
        )
        .subcommand(
            Command::new("drag")
                .about("Drag with the left button between client coordinates")
                .arg(point_arg("from", "Start as x,y"))
                .arg(point_arg("to", "End as x,y"))
                .arg(pause_arg("Pause between drag phases in milliseconds")),
        )
        .subcommand(
            Command::new("wheel")
                .about("Scroll the mouse wheel")
                .arg(point_arg("at", "Screen coordinates as x,y"))
                .arg(
                    Arg::new("up")
                        .long("up")
                        .help("Scroll up")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("down")
                        .long("down")
                        .help("Scroll down")
                        .action(ArgAction::SetTrue),
                )
                .group(
                    ArgGroup::new("direction")
                        .args(["up", "down"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("key")
                .about("Press keys one after another")
                .arg(
                    Arg::new("keys")
                        .help("Key names (e.g. enter, a, f5, 0x41)")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("chord")
                .about("Press a key combination as system keys")
                .arg(
                    Arg::new("combo")
                        .help("Keys joined with + (e.g. alt+f4)")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("clip")
                .about("Read or write clipboard text")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("get")
                        .about("Print the clipboard text")
                        .arg(encoding_arg())
                        .arg(json_arg()),
                )
                .subcommand(
                    Command::new("set")
                        .about("Replace the clipboard text")
                        .arg(
                            Arg::new("text")
                                .help("Text to place on the clipboard")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(encoding_arg()),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration")
                .arg(json_arg()),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

fn point_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).help(help).required(true).allow_hyphen_values(true)
}

fn pause_arg(help: &'static str) -> Arg {
    Arg::new("pause-ms")
        .long("pause-ms")
        .help(help)
        .value_parser(clap::value_parser!(u64))
}

fn encoding_arg() -> Arg {
    Arg::new("encoding")
        .long("encoding")
        .short('e')
        .help("Encoding label, overrides the configured one (e.g. gbk, utf-8)")
}
