//! Reset data handed in with a request.
//!
//! UEFI lays it out as a NUL-terminated UCS-2 description, optionally
//! followed by a GUID naming a platform-specific reset. Only used for
//! reporting: what gets decoded here never changes what the reset does.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// `EFI_GUID` memory layout: the first three fields little endian.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..]);
        Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// UCS-2 text still in its little-endian byte form, decoded on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    bytes: &'a [u8],
}

impl<'a> Description<'a> {
    pub fn is_empty(&self) -> bool {
        self.bytes.len() < 2
    }

    fn units(&self) -> impl Iterator<Item = u16> + 'a {
        let bytes = self.bytes;
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in char::decode_utf16(self.units()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetData<'a> {
    pub description: Description<'a>,
    pub guid: Option<Guid>,
}

impl<'a> ResetData<'a> {
    /// Splits a raw buffer. Without a terminator the whole buffer is text
    /// and there is no GUID; a GUID cut short is dropped.
    pub fn parse(data: &'a [u8]) -> Self {
        let terminator = data
            .chunks_exact(2)
            .position(|pair| pair == [0u8, 0])
            .map(|unit| unit * 2);

        match terminator {
            Some(end) => {
                let guid = data[end + 2..]
                    .get(..16)
                    .and_then(|raw| <&[u8; 16]>::try_from(raw).ok())
                    .map(Guid::from_bytes);
                Self {
                    description: Description { bytes: &data[..end] },
                    guid,
                }
            }
            None => Self {
                description: Description { bytes: data },
                guid: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{string::ToString, vec::Vec};

    fn ucs2(s: &str) -> Vec<u8> {
        s.encode_utf16()
            .chain(core::iter::once(0))
            .flat_map(u16::to_le_bytes)
            .collect()
    }

    const TAG: [u8; 16] = [
        0x78, 0x56, 0x34, 0x12, 0xbc, 0x9a, 0xf0, 0xde, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd,
        0xef,
    ];

    #[test]
    fn description_and_guid() {
        let mut data = ucs2("maskrom");
        data.extend_from_slice(&TAG);

        let parsed = ResetData::parse(&data);
        assert_eq!(parsed.description.to_string(), "maskrom");
        assert_eq!(
            parsed.guid.map(|g| g.to_string()).as_deref(),
            Some("12345678-9abc-def0-0123-456789abcdef")
        );
    }

    #[test]
    fn description_only() {
        let data = ucs2("watchdog");
        let parsed = ResetData::parse(&data);
        assert_eq!(parsed.description.to_string(), "watchdog");
        assert_eq!(parsed.guid, None);
    }

    #[test]
    fn truncated_guid_is_dropped() {
        let mut data = ucs2("x");
        data.extend_from_slice(&TAG[..10]);
        assert_eq!(ResetData::parse(&data).guid, None);
    }

    #[test]
    fn missing_terminator_keeps_everything_as_text() {
        let data: Vec<u8> = "abc".encode_utf16().flat_map(u16::to_le_bytes).collect();
        let parsed = ResetData::parse(&data);
        assert_eq!(parsed.description.to_string(), "abc");
        assert_eq!(parsed.guid, None);
    }

    #[test]
    fn empty_and_lone_surrogate() {
        assert!(ResetData::parse(&[]).description.is_empty());

        let data = [0x00, 0xd8, 0x41, 0x00, 0x00, 0x00];
        assert_eq!(ResetData::parse(&data).description.to_string(), "\u{fffd}A");
    }
}
