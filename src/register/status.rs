use crate::register::{Readable, Reg};

/// Marker struct for the STATUS (0xF3) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`crate::Bmp280::read::<Status>()`] or the convenience methods
/// [`crate::Bmp280::status`], [`crate::Bmp280::is_measuring`] and [`crate::Bmp280::is_updating`].
pub struct Status;

impl Reg for Status { const ADDR: u8 = 0xF3; }

impl Status {
    const MEASURING: u8 = 1 << 3;
    const IM_UPDATE: u8 = 1 << 0;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
    measuring: bool,
    im_update: bool,
}

impl StatusFlags {
    pub fn new(measuring: bool, im_update: bool) -> Self {
        Self { measuring, im_update }
    }

    /// Is a conversion running?
    ///
    /// Goes back to [`false`] when the results have been transferred to the data registers.
    pub fn measuring(&self) -> bool { self.measuring }

    /// Is the NVM data being copied to the image registers?
    ///
    /// This happens at power-on and after every soft reset, before the calibration
    /// coefficients can be trusted.
    pub fn updating(&self) -> bool { self.im_update }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Self::Out {
        StatusFlags {
            measuring: (b[0] & Self::MEASURING) != 0,
            im_update: (b[0] & Self::IM_UPDATE) != 0,
        }
    }
}
