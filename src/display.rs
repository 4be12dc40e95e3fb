use std::fmt;

/// Named slots a profile is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    Image,
    Name,
    Location,
    Description,
    Phone,
    Cell,
    Email,
}

impl Target {
    /// Every target, in card order
    pub const ALL: [Target; 7] = [
        Target::Image,
        Target::Name,
        Target::Location,
        Target::Description,
        Target::Phone,
        Target::Cell,
        Target::Email,
    ];

    /// Stable selector name used in logs and errors
    pub fn selector(self) -> &'static str {
        match self {
            Target::Image => "profile-img",
            Target::Name => "name",
            Target::Location => "location",
            Target::Description => "description",
            Target::Phone => "phone",
            Target::Cell => "cell",
            Target::Email => "email",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Presentation layer the renderer writes into
pub trait DisplaySurface {
    /// Whether the surface provides the given target
    fn has_target(&self, target: Target) -> bool;

    /// Replaces the text content of a text target
    fn set_text(&mut self, target: Target, text: &str);

    /// Replaces the source of an image target
    fn set_image_source(&mut self, target: Target, src: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_are_unique() {
        let mut selectors: Vec<&str> = Target::ALL.iter().map(|t| t.selector()).collect();
        selectors.sort_unstable();
        selectors.dedup();
        assert_eq!(selectors.len(), Target::ALL.len());
    }

    #[test]
    fn displays_selector() {
        assert_eq!(Target::Image.to_string(), "profile-img");
        assert_eq!(Target::Cell.to_string(), "cell");
    }
}
