use std::{collections::BTreeMap, io::Write};

use colored::Colorize;

use crate::{
    display::{DisplaySurface, Target},
    error::AppError,
};

/// Terminal profile card holding one slot per display target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    slots: BTreeMap<Target, String>,
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self::with_targets(&Target::ALL)
    }
}

impl ProfileCard {
    /// Card with every target present and empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Card providing only the given targets
    pub fn with_targets(targets: &[Target]) -> Self {
        let slots = targets.iter().map(|target| (*target, String::new())).collect();
        Self { slots }
    }

    /// Current content of a target, `None` if the card lacks it
    pub fn get(&self, target: Target) -> Option<&str> {
        self.slots.get(&target).map(String::as_str)
    }

    /// Writes the card to `out`
    ///
    /// # Arguments
    /// * `out` - Destination, usually stdout
    pub fn print(&self, out: &mut impl Write) -> Result<(), AppError> {
        let field = |target: Target| self.get(target).unwrap_or_default();

        writeln!(out, "{}", field(Target::Name).bold())?;
        writeln!(out, "{}", field(Target::Location).cyan())?;
        writeln!(out, "{} {}", "photo:".blue(), field(Target::Image))?;
        writeln!(out)?;
        writeln!(out, "{}", field(Target::Description))?;
        writeln!(out)?;
        writeln!(out, "{} {}", "phone:".blue(), field(Target::Phone))?;
        writeln!(out, "{} {}", "cell:".blue(), field(Target::Cell))?;
        writeln!(out, "{} {}", "email:".blue(), field(Target::Email))?;
        Ok(())
    }
}

impl DisplaySurface for ProfileCard {
    fn has_target(&self, target: Target) -> bool {
        self.slots.contains_key(&target)
    }

    fn set_text(&mut self, target: Target, text: &str) {
        if let Some(slot) = self.slots.get_mut(&target) {
            slot.clear();
            slot.push_str(text);
        }
    }

    fn set_image_source(&mut self, target: Target, src: &str) {
        self.set_text(target, src);
    }
}
