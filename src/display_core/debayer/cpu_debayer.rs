use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::{debug, instrument};

use crate::display_core::common::error::{Result, ViewerError};
use crate::display_core::sample::{BayerPattern, SampleData};

/// Bytes per output sample; mosaics are always demosaiced at 16 bits.
const BYTES_PER_SAMPLE: usize = 2;

impl From<BayerPattern> for CFA {
    fn from(pattern: BayerPattern) -> Self {
        match pattern {
            BayerPattern::Rggb => CFA::RGGB,
            BayerPattern::Bggr => CFA::BGGR,
            BayerPattern::Grbg => CFA::GRBG,
            BayerPattern::Gbrg => CFA::GBRG,
        }
    }
}

pub struct CpuDebayer {
    algorithm: Demosaic,
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self {
            algorithm: Demosaic::Linear,
        }
    }
}

impl CpuDebayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demosaics a single-channel mosaic into interleaved 16-bit RGB.
    ///
    /// 8-bit mosaics are promoted to 16 bits first without rescaling, which
    /// leaves headroom for the interpolation.
    #[instrument(skip(self, mosaic))]
    pub fn process(
        &self,
        mosaic: &SampleData,
        width: usize,
        height: usize,
        pattern: BayerPattern,
    ) -> Result<Vec<u16>> {
        let mosaic_bytes: Vec<u8> = match mosaic {
            SampleData::U8(values) => values
                .iter()
                .flat_map(|&v| u16::from(v).to_le_bytes())
                .collect(),
            SampleData::U16(values) => values.iter().flat_map(|&v| v.to_le_bytes()).collect(),
            other => {
                return Err(ViewerError::DemosaicError(format!(
                    "unsupported mosaic representation {:?}",
                    other.representation()
                )));
            }
        };

        if mosaic_bytes.len() != width * height * BYTES_PER_SAMPLE {
            return Err(ViewerError::DemosaicError(format!(
                "mosaic holds {} bytes, expected {}x{}x{}",
                mosaic_bytes.len(),
                width,
                height,
                BYTES_PER_SAMPLE
            )));
        }

        let output_buf_size = width * height * 3 * BYTES_PER_SAMPLE;
        let mut output_buf = vec![0u8; output_buf_size];
        let mut cursor = Cursor::new(&mosaic_bytes[..]);

        debug!(
            "Running demosaic with CFA={:?}, algo={:?}, output buffer {} bytes",
            pattern, self.algorithm, output_buf_size
        );

        {
            let mut output_raster = RasterMut::new(width, height, RasterDepth::Depth16, &mut output_buf);
            bayer::run_demosaic(
                &mut cursor,
                BayerDepth::Depth16LE,
                pattern.into(),
                self.algorithm,
                &mut output_raster,
            )
            .map_err(|e| ViewerError::DemosaicError(format!("{:?}", e)))?;
        }

        // The raster stores u16 samples in native byte order.
        let rgb = output_buf
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|b| u16::from_ne_bytes([b[0], b[1]]))
            .collect();

        Ok(rgb)
    }
}
