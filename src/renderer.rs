use tracing::info;

use crate::{
    display::{DisplaySurface, Target},
    error::AppError,
    profile::ProfileRecord,
};

/// Writes a profile's display strings into a bound surface
#[derive(Debug)]
pub struct ProfileRenderer<S> {
    surface: S,
}

impl<S: DisplaySurface> ProfileRenderer<S> {
    /// Binds the renderer to a surface that provides every target
    ///
    /// # Arguments
    /// * `surface` - Presentation layer to write into
    pub fn bind(surface: S) -> Result<Self, AppError> {
        if let Some(missing) = Target::ALL.into_iter().find(|target| !surface.has_target(*target)) {
            return Err(AppError::MissingTarget(missing.selector().to_string()));
        }
        Ok(Self { surface })
    }

    /// Renders a profile into all targets
    pub fn render(&mut self, record: &ProfileRecord) {
        let full_name = record.full_name();
        let origin = record.origin();

        self.surface.set_image_source(Target::Image, &record.picture.large);
        self.surface.set_text(Target::Name, &full_name);
        self.surface.set_text(Target::Location, &origin);
        self.surface.set_text(Target::Description, &record.description());
        self.surface.set_text(Target::Phone, &record.phone);
        self.surface.set_text(Target::Cell, &record.cell);
        self.surface.set_text(Target::Email, &record.email);

        info!(name = %full_name, origin = %origin, "rendered profile");
    }

    /// Borrows the surface for inspection
    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
