use winsafe::{co, prelude::NativeBitflag, DEVMODE, DISPLAY_DEVICE, GmidxEnum};

use crate::{
    backend::{BackendError, Device, DisplayApi},
    types::{ChangeRequest, ChangeStatus, DisplayMode, Resolution},
};

/// [`DisplayApi`] backed by the Windows display configuration API
#[derive(Debug, Default)]
pub struct NativeDisplay;

impl NativeDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayApi for NativeDisplay {
    fn devices(&self) -> Result<Vec<Device>, BackendError> {
        let mut devices = Vec::new();

        let mut dev_num: u32 = 0;
        let mut display_device = DISPLAY_DEVICE::default();

        loop {
            let is_good =
                winsafe::EnumDisplayDevices(None, dev_num, &mut display_device, co::EDD::NoValue)?;

            if !is_good {
                break;
            }

            log::debug!(
                "{}: {} - {}",
                dev_num,
                display_device.DeviceName(),
                display_device.DeviceString()
            );

            devices.push(Device {
                name: display_device.DeviceName(),
                string: display_device.DeviceString(),
                active: display_device
                    .StateFlags
                    .has(co::DISPLAY_DEVICE::ACTIVE),
                primary: display_device
                    .StateFlags
                    .has(co::DISPLAY_DEVICE::PRIMARY_DEVICE),
            });

            dev_num += 1; // advance to next display device
        }

        Ok(devices)
    }

    fn current_mode(&self, device: &str) -> Result<DisplayMode, BackendError> {
        let mut devmode = DEVMODE::default();
        winsafe::EnumDisplaySettings(
            Some(device),
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        )?;

        Ok(mode_from_devmode(&devmode))
    }

    fn modes(&self, device: &str) -> Result<Vec<DisplayMode>, BackendError> {
        let mut modes = Vec::new();
        let mut devmode = DEVMODE::default();

        // the call fails once the index runs past the driver's mode list
        for mode_num in 0u32.. {
            if winsafe::EnumDisplaySettings(Some(device), GmidxEnum::Gmidx(mode_num), &mut devmode)
                .is_err()
            {
                break;
            }
            modes.push(mode_from_devmode(&devmode));
        }

        log::debug!("{}: driver reported {} mode entries", device, modes.len());

        Ok(modes)
    }

    fn apply(
        &self,
        device: &str,
        request: &ChangeRequest,
        persist: bool,
        global: bool,
    ) -> Result<ChangeStatus, BackendError> {
        let mut devmode = DEVMODE::default();
        devmode.dmPelsWidth = request.resolution.width;
        devmode.dmPelsHeight = request.resolution.height;
        devmode.dmFields = co::DM::PELSWIDTH | co::DM::PELSHEIGHT;

        if let Some(bit_depth) = request.bit_depth {
            devmode.dmBitsPerPel = bit_depth;
            devmode.dmFields |= co::DM::BITSPERPEL;
        }

        if let Some(frequency) = request.frequency {
            devmode.dmDisplayFrequency = frequency;
            devmode.dmFields |= co::DM::DISPLAYFREQUENCY;
        }

        let mut flags = co::CDS::DYNAMICALLY;
        if persist {
            flags |= co::CDS::UPDATEREGISTRY;
        }
        if global {
            flags |= co::CDS::GLOBAL;
        }

        log::debug!("{}: requesting {}", device, request);

        let status = match winsafe::ChangeDisplaySettingsEx(Some(device), Some(&mut devmode), flags)
        {
            Ok(accepted) => status_from(accepted),
            Err(rejected) => status_from(rejected),
        };

        Ok(status)
    }
}

/// Maps a `DISP_CHANGE` code onto [`ChangeStatus`]
fn status_from(code: co::DISP_CHANGE) -> ChangeStatus {
    match code {
        co::DISP_CHANGE::SUCCESSFUL => ChangeStatus::Success,
        co::DISP_CHANGE::RESTART => ChangeStatus::RestartRequired,
        co::DISP_CHANGE::BADFLAGS => ChangeStatus::BadFlags,
        co::DISP_CHANGE::BADPARAM => ChangeStatus::BadParameter,
        co::DISP_CHANGE::FAILED => ChangeStatus::Failed,
        co::DISP_CHANGE::BADMODE => ChangeStatus::BadMode,
        co::DISP_CHANGE::NOTUPDATED => ChangeStatus::NotUpdated,
        other => {
            log::warn!("unrecognized DISP_CHANGE code: {}", other);
            ChangeStatus::Unknown
        }
    }
}

fn mode_from_devmode(devmode: &DEVMODE) -> DisplayMode {
    DisplayMode {
        resolution: Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
        bit_depth: devmode.dmBitsPerPel,
        frequency: devmode.dmDisplayFrequency,
    }
}
