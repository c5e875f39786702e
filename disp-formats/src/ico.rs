//! ICO icon container (.ico)
//!
//! 32-bit BMP-in-ICO images with an all-zero AND-mask.
//!
//! # Layout
//! ```text
//! 0x00: reserved u16 (0)
//! 0x02: type u16 (1 = icon)
//! 0x04: image_count u16
//! 0x06: directory entries (16 bytes each)
//!       width u8 (0 = 256), height u8 (0 = 256), color_count u8, reserved u8,
//!       planes u16, bit_count u16, data_size u32, data_offset u32
//! then per image, at data_offset:
//!       BITMAPINFOHEADER (40 bytes, height doubled)
//!       pixel data (width × height × 4 bytes, BGRA, rows in buffer order)
//!       AND-mask (width × height / 8 bytes, all zero)
//! ```

use std::io::Write;

use crate::error::{FormatError, WriteError};

/// Bits per pixel of every image this encoder writes
pub const BITS_PER_PIXEL: u16 = 32;

/// Largest edge an ICO directory entry can describe
pub const MAX_DIMENSION: u32 = 256;

/// Length of the 1-bit AND-mask for an image
#[inline]
pub fn and_mask_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize) / 8
}

// =============================================================================
// Pixel buffer
// =============================================================================

/// BGRA pixel buffer for one icon image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// BGRA pixel data (4 bytes per pixel, row-major)
    pub bgra: Vec<u8>,
}

impl IconImage {
    /// Create a fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bgra: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Set pixel at (x, y) from an RGBA color
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.bgra[idx..idx + 4].copy_from_slice(&[rgba[2], rgba[1], rgba[0], rgba[3]]);
    }

    /// Get pixel at (x, y) as RGBA
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.bgra[idx + 2],
            self.bgra[idx + 1],
            self.bgra[idx],
            self.bgra[idx + 3],
        ]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Size of this image's data blob (bitmap header + pixels + AND-mask)
    pub fn data_size(&self) -> usize {
        BitmapInfoHeader::SIZE + self.bgra.len() + and_mask_len(self.width, self.height)
    }

    fn validate(&self) -> Result<(), FormatError> {
        let dims_ok = (1..=MAX_DIMENSION).contains(&self.width)
            && (1..=MAX_DIMENSION).contains(&self.height)
            && (self.width * self.height) % 8 == 0;
        if !dims_ok {
            return Err(FormatError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let expected = self.width as usize * self.height as usize * 4;
        if self.bgra.len() != expected {
            return Err(FormatError::PixelDataMismatch {
                expected,
                actual: self.bgra.len(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Headers
// =============================================================================

/// ICO file header (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoHeader {
    pub reserved: u16,
    pub icon_type: u16,
    pub image_count: u16,
}

impl IcoHeader {
    pub const SIZE: usize = 6;

    /// Icon type value (cursors use 2)
    pub const TYPE_ICON: u16 = 1;

    pub fn new(image_count: u16) -> Self {
        Self {
            reserved: 0,
            icon_type: Self::TYPE_ICON,
            image_count,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.reserved.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.icon_type.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.image_count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            reserved: u16::from_le_bytes([bytes[0], bytes[1]]),
            icon_type: u16::from_le_bytes([bytes[2], bytes[3]]),
            image_count: u16::from_le_bytes([bytes[4], bytes[5]]),
        })
    }
}

/// ICO directory entry (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoDirEntry {
    /// Width in pixels (256 is stored as 0 on disk)
    pub width: u32,
    /// Height in pixels (256 is stored as 0 on disk)
    pub height: u32,
    pub color_count: u8,
    pub planes: u16,
    pub bit_count: u16,
    /// Size of the image data blob in bytes
    pub data_size: u32,
    /// Absolute offset of the image data blob
    pub data_offset: u32,
}

impl IcoDirEntry {
    pub const SIZE: usize = 16;

    pub fn new(width: u32, height: u32, data_size: u32, data_offset: u32) -> Self {
        Self {
            width,
            height,
            color_count: 0,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            data_size,
            data_offset,
        }
    }

    /// Write entry to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = encode_dimension(self.width);
        bytes[1] = encode_dimension(self.height);
        bytes[2] = self.color_count;
        // bytes[3] reserved
        bytes[4..6].copy_from_slice(&self.planes.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.bit_count.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.data_size.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.data_offset.to_le_bytes());
        bytes
    }

    /// Read entry from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            width: decode_dimension(bytes[0]),
            height: decode_dimension(bytes[1]),
            color_count: bytes[2],
            planes: u16::from_le_bytes([bytes[4], bytes[5]]),
            bit_count: u16::from_le_bytes([bytes[6], bytes[7]]),
            data_size: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            data_offset: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        })
    }
}

#[inline]
fn encode_dimension(value: u32) -> u8 {
    if value == MAX_DIMENSION {
        0
    } else {
        value as u8
    }
}

#[inline]
fn decode_dimension(value: u8) -> u32 {
    if value == 0 { MAX_DIMENSION } else { value as u32 }
}

/// BITMAPINFOHEADER (40 bytes)
///
/// `height` holds the doubled value stored on disk (XOR rows + AND rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bit_count: u16,
}

impl BitmapInfoHeader {
    pub const SIZE: usize = 40;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            header_size: Self::SIZE as u32,
            width,
            height: height * 2,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
        }
    }

    /// Write header to bytes. Compression, image size, resolution and
    /// palette fields are left zero.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.planes.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            header_size: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            width: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            height: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            planes: u16::from_le_bytes([bytes[12], bytes[13]]),
            bit_count: u16::from_le_bytes([bytes[14], bytes[15]]),
        })
    }

    /// Image height (half the stored value)
    pub fn image_height(&self) -> u32 {
        self.height / 2
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode images into a complete ICO file
///
/// Image data blobs follow the directory in the same order as `images`.
pub fn encode_ico(images: &[IconImage]) -> Result<Vec<u8>, FormatError> {
    if images.is_empty() {
        return Err(FormatError::NoImages);
    }
    let count =
        u16::try_from(images.len()).map_err(|_| FormatError::TooManyImages(images.len()))?;
    for image in images {
        image.validate()?;
    }

    let dir_end = IcoHeader::SIZE + images.len() * IcoDirEntry::SIZE;
    let total = dir_end + images.iter().map(IconImage::data_size).sum::<usize>();
    let mut output = Vec::with_capacity(total);

    output.extend_from_slice(&IcoHeader::new(count).to_bytes());

    let mut offset = dir_end;
    for image in images {
        let size = image.data_size();
        let entry = IcoDirEntry::new(image.width, image.height, size as u32, offset as u32);
        output.extend_from_slice(&entry.to_bytes());
        offset += size;
    }

    for image in images {
        output.extend_from_slice(&BitmapInfoHeader::new(image.width, image.height).to_bytes());
        output.extend_from_slice(&image.bgra);
        output.resize(output.len() + and_mask_len(image.width, image.height), 0);
    }

    Ok(output)
}

/// Encode images and write the complete ICO file to `w`
pub fn write_ico<W: Write>(w: &mut W, images: &[IconImage]) -> Result<(), WriteError> {
    let data = encode_ico(images)?;
    w.write_all(&data)?;
    Ok(())
}

// =============================================================================
// Decoding
// =============================================================================

/// Read the ICO header and directory entries
///
/// Does not look at image data, so it also works for PNG-embedded icons.
pub fn read_directory(data: &[u8]) -> Result<(IcoHeader, Vec<IcoDirEntry>), FormatError> {
    let header = IcoHeader::from_bytes(data).ok_or(FormatError::TooSmall {
        needed: IcoHeader::SIZE,
        actual: data.len(),
    })?;
    if header.reserved != 0 {
        return Err(FormatError::InvalidReserved(header.reserved));
    }
    if header.icon_type != IcoHeader::TYPE_ICON {
        return Err(FormatError::InvalidIconType(header.icon_type));
    }

    let count = header.image_count as usize;
    let dir_end = IcoHeader::SIZE + count * IcoDirEntry::SIZE;
    if data.len() < dir_end {
        return Err(FormatError::TooSmall {
            needed: dir_end,
            actual: data.len(),
        });
    }

    let entries = data[IcoHeader::SIZE..dir_end]
        .chunks_exact(IcoDirEntry::SIZE)
        .filter_map(IcoDirEntry::from_bytes)
        .collect();

    Ok((header, entries))
}

/// One BMP-embedded image decoded from an ICO file
#[derive(Debug, Clone)]
pub struct DecodedIcon {
    pub entry: IcoDirEntry,
    pub bitmap: BitmapInfoHeader,
    pub image: IconImage,
    pub and_mask: Vec<u8>,
}

/// Decode every image of an ICO file written by [`encode_ico`]
pub fn decode_ico(data: &[u8]) -> Result<Vec<DecodedIcon>, FormatError> {
    let (_, entries) = read_directory(data)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let start = entry.data_offset as usize;
            let end = start + entry.data_size as usize;
            let blob = data
                .get(start..end)
                .ok_or(FormatError::Truncated("image data past end of file"))?;

            let bitmap = BitmapInfoHeader::from_bytes(blob)
                .filter(|b| b.header_size == BitmapInfoHeader::SIZE as u32)
                .filter(|b| b.bit_count == BITS_PER_PIXEL)
                .filter(|b| b.width == entry.width && b.image_height() == entry.height)
                .filter(|b| b.width <= MAX_DIMENSION && b.image_height() <= MAX_DIMENSION)
                .ok_or(FormatError::InvalidBitmapHeader(index))?;

            let width = bitmap.width;
            let height = bitmap.image_height();
            let pixel_len = width as usize * height as usize * 4;
            let mask_len = and_mask_len(width, height);

            let pixels = blob
                .get(BitmapInfoHeader::SIZE..BitmapInfoHeader::SIZE + pixel_len)
                .ok_or(FormatError::Truncated("pixel data"))?;
            let mask_start = BitmapInfoHeader::SIZE + pixel_len;
            let and_mask = blob
                .get(mask_start..mask_start + mask_len)
                .ok_or(FormatError::Truncated("AND-mask"))?;

            Ok(DecodedIcon {
                entry,
                bitmap,
                image: IconImage {
                    width,
                    height,
                    bgra: pixels.to_vec(),
                },
                and_mask: and_mask.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> IconImage {
        let mut image = IconImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    image.set_pixel(x, y, [10, 20, 30, 255]);
                }
            }
        }
        image
    }

    #[test]
    fn test_header_sizes() {
        assert_eq!(IcoHeader::new(1).to_bytes().len(), 6);
        assert_eq!(IcoDirEntry::new(32, 32, 0, 0).to_bytes().len(), 16);
        assert_eq!(BitmapInfoHeader::new(32, 32).to_bytes().len(), 40);
    }

    #[test]
    fn test_pixel_stored_as_bgra() {
        let mut image = IconImage::new(8, 8);
        image.set_pixel(1, 0, [1, 2, 3, 4]);
        assert_eq!(&image.bgra[4..8], &[3, 2, 1, 4]);
        assert_eq!(image.get_pixel(1, 0), [1, 2, 3, 4]);
    }

    #[test]
    fn test_single_image_layout() {
        let data = encode_ico(&[checker(32, 32)]).unwrap();

        // header + entry + bitmap header + pixels + mask
        assert_eq!(data.len(), 6 + 16 + 40 + 32 * 32 * 4 + 128);
        assert_eq!(&data[0..6], &[0, 0, 1, 0, 1, 0]);

        let entry = IcoDirEntry::from_bytes(&data[6..22]).unwrap();
        assert_eq!(entry.data_offset, 22);
        assert_eq!(entry.data_size as usize, 40 + 4096 + 128);

        let bitmap = BitmapInfoHeader::from_bytes(&data[22..62]).unwrap();
        assert_eq!(bitmap.width, 32);
        assert_eq!(bitmap.height, 64);
        assert_eq!(bitmap.planes, 1);
        assert_eq!(bitmap.bit_count, 32);
        assert!(data[38..62].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_directory_matches_encoded_images() {
        let images = [checker(32, 32), checker(48, 48)];
        let data = encode_ico(&images).unwrap();
        let (header, entries) = read_directory(&data).unwrap();

        assert_eq!(header.image_count, 2);
        for (entry, image) in entries.iter().zip(&images) {
            assert_eq!(entry.width, image.width);
            assert_eq!(entry.height, image.height);
            assert_eq!(entry.bit_count, 32);
            assert_eq!(entry.data_size as usize, image.data_size());
        }
    }

    #[test]
    fn test_multi_image_offsets_are_contiguous() {
        let data = encode_ico(&[checker(16, 16), checker(32, 32), checker(48, 48)]).unwrap();
        let (_, entries) = read_directory(&data).unwrap();

        assert_eq!(entries[0].data_offset as usize, 6 + 3 * 16);
        for pair in entries.windows(2) {
            assert_eq!(pair[1].data_offset, pair[0].data_offset + pair[0].data_size);
        }
        let last = entries.last().unwrap();
        assert_eq!((last.data_offset + last.data_size) as usize, data.len());
    }

    #[test]
    fn test_and_mask_is_zero_and_sized() {
        let data = encode_ico(&[checker(48, 48)]).unwrap();
        let decoded = decode_ico(&data).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].and_mask.len(), 48 * 48 / 8);
        assert!(decoded[0].and_mask.iter().all(|&b| b == 0));
        assert_eq!(decoded[0].image, checker(48, 48));
    }

    #[test]
    fn test_256_encoded_as_zero() {
        let data = encode_ico(&[IconImage::new(256, 256)]).unwrap();
        assert_eq!(data[6], 0);
        assert_eq!(data[7], 0);

        let (_, entries) = read_directory(&data).unwrap();
        assert_eq!(entries[0].width, 256);
        assert_eq!(entries[0].height, 256);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(encode_ico(&[]), Err(FormatError::NoImages));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let too_big = IconImage::new(257, 8);
        assert!(matches!(
            encode_ico(&[too_big]),
            Err(FormatError::InvalidDimensions { width: 257, .. })
        ));

        let odd = IconImage::new(3, 3);
        assert!(matches!(
            encode_ico(&[odd]),
            Err(FormatError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_pixel_mismatch() {
        let mut image = IconImage::new(8, 8);
        image.bgra.pop();
        assert_eq!(
            encode_ico(&[image]),
            Err(FormatError::PixelDataMismatch {
                expected: 256,
                actual: 255
            })
        );
    }

    #[test]
    fn test_read_directory_errors() {
        assert!(matches!(
            read_directory(&[0, 0, 1]),
            Err(FormatError::TooSmall { .. })
        ));
        assert_eq!(
            read_directory(&[0, 0, 2, 0, 0, 0]),
            Err(FormatError::InvalidIconType(2))
        );
        assert!(matches!(
            read_directory(&[0, 0, 1, 0, 1, 0]),
            Err(FormatError::TooSmall { needed: 22, .. })
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let data = encode_ico(&[checker(32, 32)]).unwrap();
        assert!(matches!(
            decode_ico(&data[..data.len() - 1]),
            Err(FormatError::Truncated(_))
        ));
    }

    #[test]
    fn test_decode_rejects_oversized_bitmap_header() {
        let mut data = encode_ico(&[checker(8, 8)]).unwrap();
        data[26..30].copy_from_slice(&u32::MAX.to_le_bytes());
        data[30..34].copy_from_slice(&(u32::MAX - 1).to_le_bytes());

        assert_eq!(decode_ico(&data).unwrap_err(), FormatError::InvalidBitmapHeader(0));
    }

    #[test]
    fn test_decode_rejects_bitmap_disagreeing_with_directory() {
        let mut data = encode_ico(&[checker(16, 16)]).unwrap();
        // Width 32 would read past the 16x16 blob
        data[26..30].copy_from_slice(&32u32.to_le_bytes());

        assert_eq!(decode_ico(&data).unwrap_err(), FormatError::InvalidBitmapHeader(0));
    }
}
