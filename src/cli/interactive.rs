//! Interactive menu loop.
//!
//! The currently selected plist lives in a [`Session`] owned by the loop and
//! passed to each action.

use crate::cli::output::map_error;
use crate::cli::presentation::{
    format_detection_report, format_section_heading, format_toggle_header, format_toggle_report,
};
use crate::config::InteractiveConfig;
use crate::detect::detect;
use crate::error::ToggleError;
use crate::{plist_io, toggle};
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MENU_ITEMS: [&str; 4] = [
    "Select plist",
    "Enable debugging",
    "Disable debugging",
    "Quit",
];

/// Interactive state: the plist the menu actions operate on.
#[derive(Debug, Clone, Default)]
pub struct Session {
    plist_path: Option<PathBuf>,
}

impl Session {
    pub fn new(plist_path: Option<PathBuf>) -> Self {
        Self { plist_path }
    }

    pub fn plist_path(&self) -> Option<&Path> {
        self.plist_path.as_deref()
    }

    /// Selected path, but only while it still points at a file.
    fn valid_plist_path(&self) -> Option<&Path> {
        self.plist_path().filter(|p| p.is_file())
    }

    pub fn select(&mut self, path: PathBuf) {
        info!(path = %path.display(), "Selected plist");
        self.plist_path = Some(path);
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Run the menu until the user quits.
pub fn run(config: &InteractiveConfig) -> Result<(), ToggleError> {
    let mut session = Session::new(config.default_plist.clone());
    loop {
        println!("\n{}\n", format_section_heading("Toggle Debug"));
        match session.plist_path() {
            Some(path) => match plist_io::load(path) {
                Ok(loaded) => print!("{}", format_detection_report(path, &detect(&loaded.document))),
                Err(e) => {
                    println!("Current plist: {}", path.display());
                    println!("{}", map_error(&e));
                }
            },
            None => println!("Current plist: None selected"),
        }
        println!();

        let choice = Select::new()
            .with_prompt("Please select an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        let flow = match choice {
            0 => select_plist(&mut session)?,
            1 => toggle_debugging(&mut session, true, config)?,
            2 => toggle_debugging(&mut session, false, config)?,
            _ => Flow::Quit,
        };
        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

/// Prompt until a loadable plist is given, or the user returns or quits.
fn select_plist(session: &mut Session) -> Result<Flow, ToggleError> {
    loop {
        println!("\n{}\n", format_section_heading("Select Plist"));
        println!(
            "Current plist: {}",
            session
                .plist_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "None selected".to_string())
        );
        println!("\nM. Return\nQ. Quit\n");

        let entry: String = Input::new()
            .with_prompt("Please drag and drop the target plist")
            .allow_empty(true)
            .interact_text()?;
        match entry.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "m" => return Ok(Flow::Continue),
            "q" => return Ok(Flow::Quit),
            _ => {}
        }

        let Some(path) = clean_dropped_path(&entry).filter(|p| p.is_file()) else {
            warn!(entry = %entry, "Not a plist path");
            continue;
        };
        match plist_io::load(&path) {
            Ok(_) => {
                session.select(path);
                return Ok(Flow::Continue);
            }
            Err(e) => {
                println!("\n{}\n", format_section_heading("Failed To Load Plist"));
                println!("{}\n", map_error(&e));
                pause()?;
            }
        }
    }
}

fn toggle_debugging(
    session: &mut Session,
    enable: bool,
    config: &InteractiveConfig,
) -> Result<Flow, ToggleError> {
    if session.valid_plist_path().is_none() {
        if let Flow::Quit = select_plist(session)? {
            return Ok(Flow::Quit);
        }
    }
    let Some(path) = session.valid_plist_path().map(Path::to_path_buf) else {
        return Ok(Flow::Continue);
    };

    println!(
        "\n{}\n",
        format_section_heading(if enable { "Enabling Debugging" } else { "Disabling Debugging" })
    );
    match toggle::run(&path, enable) {
        Ok(report) => println!("{}", format_toggle_report(&path, &report)),
        Err(e) => {
            println!("{}", format_toggle_header(&path, enable));
            println!("{}", map_error(&e));
        }
    }
    if config.pause_after_action {
        println!();
        pause()?;
    }
    Ok(Flow::Continue)
}

fn pause() -> Result<(), ToggleError> {
    let _: String = Input::new()
        .with_prompt("Press [enter] to return...")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Normalize a path typed or dragged into a terminal: surrounding quotes,
/// backslash-escaped characters and a leading `~` are resolved.
pub fn clean_dropped_path(entry: &str) -> Option<PathBuf> {
    let mut text = entry.trim();
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = &text[1..text.len() - 1];
        }
    }

    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                unescaped.push(next);
                continue;
            }
        }
        unescaped.push(c);
    }
    if unescaped.is_empty() {
        return None;
    }

    if unescaped == "~" || unescaped.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            let rest = unescaped.trim_start_matches('~').trim_start_matches('/');
            return Some(PathBuf::from(home).join(rest));
        }
    }
    Some(PathBuf::from(unescaped))
}
