use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GateError, GateResult};

/// Viewport class chosen from the width hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthClass {
    /// Narrow viewport, below the breakpoint.
    Mobile,
    /// Wide or unknown viewport.
    Desktop,
}

/// Fixed box dimensions for one render.
///
/// Only obtainable through validated constructors, so every value satisfies
/// `gate_width >= MIN_GATE_WIDTH`, `door_height > 0` and
/// `content_width == gate_width - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GateDimensions {
    gate_width: usize,
    door_height: usize,
    content_width: usize,
}

impl GateDimensions {
    /// Validated dimensions for an explicit interior size.
    pub fn new(gate_width: usize, door_height: usize) -> GateResult<Self> {
        check_gate_width("gate_width", gate_width)?;
        check_door_height(door_height)?;
        Ok(Self::sized(gate_width, door_height))
    }

    /// Dimensions for an optional viewport width under the default config.
    pub fn for_viewport(viewport_width: Option<u32>) -> Self {
        let cfg = GateConfig::default();
        Self::sized(cfg.gate_width_for(viewport_width), cfg.door_height)
    }

    // Callers have already checked both values.
    fn sized(gate_width: usize, door_height: usize) -> Self {
        Self {
            gate_width,
            door_height,
            content_width: gate_width - 1,
        }
    }

    /// Interior column count, borders excluded.
    pub fn gate_width(self) -> usize {
        self.gate_width
    }

    /// Interior row count, borders excluded.
    pub fn door_height(self) -> usize {
        self.door_height
    }

    /// `gate_width - 1`; the last column is reserved for the handle.
    pub fn content_width(self) -> usize {
        self.content_width
    }

    /// Index of the handle row among interior rows.
    pub fn middle_row(self) -> usize {
        self.door_height / 2
    }

    /// Width of every finished row, borders included.
    pub fn line_width(self) -> usize {
        self.gate_width + 2
    }

    /// Row count of a finished box, borders included.
    pub fn box_height(self) -> usize {
        self.door_height + 2
    }
}

/// Breakpoint and box sizes.
///
/// The defaults are the shipped gate: 20 columns below 768px, 48 otherwise,
/// nine interior rows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Viewports strictly narrower than this are mobile.
    pub mobile_breakpoint_px: u32,
    /// Interior width used for mobile viewports.
    pub mobile_gate_width: usize,
    /// Interior width used for desktop or unknown viewports.
    pub desktop_gate_width: usize,
    /// Interior row count for both classes.
    pub door_height: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            mobile_gate_width: 20,
            desktop_gate_width: 48,
            door_height: 9,
        }
    }
}

/// Smallest interior width that still fits `" " + "..."` truncation.
pub const MIN_GATE_WIDTH: usize = 4;

impl GateConfig {
    /// Check that every class yields a well-formed gate.
    pub fn validate(&self) -> GateResult<()> {
        check_gate_width("mobile_gate_width", self.mobile_gate_width)?;
        check_gate_width("desktop_gate_width", self.desktop_gate_width)?;
        check_door_height(self.door_height)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> GateResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GateError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> GateResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read gate config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Class for an optional viewport width; unknown widths are desktop.
    pub fn width_class(&self, viewport_width: Option<u32>) -> WidthClass {
        match viewport_width {
            Some(w) if w < self.mobile_breakpoint_px => WidthClass::Mobile,
            _ => WidthClass::Desktop,
        }
    }

    /// Box dimensions for an optional viewport width.
    ///
    /// Fails when the config does not pass [`validate`](Self::validate).
    pub fn dimensions(&self, viewport_width: Option<u32>) -> GateResult<GateDimensions> {
        self.validate()?;
        Ok(GateDimensions::sized(
            self.gate_width_for(viewport_width),
            self.door_height,
        ))
    }

    fn gate_width_for(&self, viewport_width: Option<u32>) -> usize {
        match self.width_class(viewport_width) {
            WidthClass::Mobile => self.mobile_gate_width,
            WidthClass::Desktop => self.desktop_gate_width,
        }
    }
}

fn check_gate_width(field: &str, width: usize) -> GateResult<()> {
    if width < MIN_GATE_WIDTH {
        return Err(GateError::validation(format!(
            "{field} must be >= {MIN_GATE_WIDTH}, got {width}"
        )));
    }
    Ok(())
}

fn check_door_height(height: usize) -> GateResult<()> {
    if height == 0 {
        return Err(GateError::validation("door_height must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/gate.rs"]
mod tests;
