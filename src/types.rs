use core::fmt;

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One hardware-supported configuration of a monitor.
///
/// Field order matters: the derived `Ord` is the lexicographic
/// width, height, depth, frequency ordering the mode table is printed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayMode {
    pub resolution: Resolution,
    /// Color depth in bits per pixel
    pub bit_depth: u32,
    /// Refresh rate in Hz
    pub frequency: u32,
}

impl DisplayMode {
    /// Creates a new display mode
    pub fn new(resolution: Resolution, bit_depth: u32, frequency: u32) -> Self {
        Self {
            resolution,
            bit_depth,
            frequency,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} bit, {} Hz",
            self.resolution, self.bit_depth, self.frequency
        )
    }
}

/// A requested settings change for one monitor.
///
/// The resolution is always part of the request. Bit depth and frequency
/// are optional: an absent field is left unchanged by the driver and is
/// excluded from the [`is_satisfied_by`](Self::is_satisfied_by) comparison,
/// it does not have to match any default.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub resolution: Resolution,
    pub bit_depth: Option<u32>,
    pub frequency: Option<u32>,
}

impl ChangeRequest {
    /// Creates a resolution-only request
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            bit_depth: None,
            frequency: None,
        }
    }

    /// Also requests a color depth, in bits per pixel
    pub fn with_bit_depth(mut self, bit_depth: u32) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    /// Also requests a refresh rate, in Hz
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Returns whether `current` already satisfies this request, i.e. the
    /// resolution matches exactly and every specified optional field
    /// matches exactly.
    pub fn is_satisfied_by(&self, current: &DisplayMode) -> bool {
        self.resolution == current.resolution
            && self.bit_depth.is_none_or(|bits| bits == current.bit_depth)
            && self.frequency.is_none_or(|hz| hz == current.frequency)
    }
}

impl fmt::Display for ChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolution)?;
        if let Some(bits) = self.bit_depth {
            write!(f, ", {} bit", bits)?;
        }
        if let Some(hz) = self.frequency {
            write!(f, ", {} Hz", hz)?;
        }
        Ok(())
    }
}

/// The driver's verdict on a change request.
///
/// Mirrors the `DISP_CHANGE` status family. A rejection is an expected
/// answer, not an error: it is reported once and the program moves on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    Success,
    RestartRequired,
    BadFlags,
    BadParameter,
    Failed,
    BadMode,
    NotUpdated,
    Unknown,
}

impl ChangeStatus {
    /// Whether the driver accepted the settings
    pub fn is_success(self) -> bool {
        matches!(self, ChangeStatus::Success | ChangeStatus::RestartRequired)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ChangeStatus::Success => "The requested settings were applied.",
            ChangeStatus::RestartRequired => {
                "The settings were saved; they take effect after a restart."
            }
            ChangeStatus::BadFlags => "An invalid set of flags was passed to the display driver.",
            ChangeStatus::BadParameter => "An invalid parameter was passed to the display driver.",
            ChangeStatus::Failed => "The display driver failed the requested mode.",
            ChangeStatus::BadMode => "The requested mode is not supported by this monitor.",
            ChangeStatus::NotUpdated => "The settings could not be written to the registry.",
            ChangeStatus::Unknown => "The display driver returned an unknown status.",
        };
        f.write_str(message)
    }
}
