// Binary appinfo.vdf decoding

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::appinfo::types::{AppInfoError, Value};

pub const MAGIC_V27: u32 = 0x0756_4427;
pub const MAGIC_V28: u32 = 0x0756_4428;
pub const MAGIC_V29: u32 = 0x0756_4429;

const TYPE_MAP: u8 = 0x00;
const TYPE_STRING: u8 = 0x01;
const TYPE_INT32: u8 = 0x02;
const TYPE_FLOAT32: u8 = 0x03;
const TYPE_POINTER: u8 = 0x04;
const TYPE_WSTRING: u8 = 0x05;
const TYPE_COLOR: u8 = 0x06;
const TYPE_UINT64: u8 = 0x07;
const TYPE_MAP_END: u8 = 0x08;
const TYPE_INT64: u8 = 0x0A;
const TYPE_MAP_END_ALT: u8 = 0x0B;

/// Bytes between an entry's size field and its KeyValues payload
fn entry_header_len(version: u32) -> u64 {
    // info_state, last_updated, pics_token, sha1, change_number
    let base = 4 + 4 + 8 + 20 + 4;
    if version >= 28 { base + 20 } else { base }
}

/// Scan an appinfo.vdf image for `app_id` and decode its KeyValues.
///
/// Entries for other apps are skipped by size without being decoded.
/// Returns `Ok(None)` when the terminator is reached without a match.
pub fn find_app(data: &[u8], app_id: u32) -> Result<Option<Value>, AppInfoError> {
    let mut cur = Cursor::new(data);
    let magic = read_u32(&mut cur)?;
    let version = match magic {
        MAGIC_V27 => 27,
        MAGIC_V28 => 28,
        MAGIC_V29 => 29,
        other => return Err(AppInfoError::BadMagic(other)),
    };
    let _universe = read_u32(&mut cur)?;

    let strings = if version >= 29 {
        let offset = cur.read_i64::<LittleEndian>().map_err(eof)?;
        Some(read_string_table(data, offset)?)
    } else {
        None
    };

    loop {
        let id = read_u32(&mut cur)?;
        if id == 0 {
            return Ok(None);
        }
        let size = read_u32(&mut cur)? as u64;
        let start = cur.position();
        let end = start + size;
        if end > data.len() as u64 {
            return Err(AppInfoError::Truncated);
        }

        if id == app_id {
            let payload_start = start + entry_header_len(version);
            if payload_start > end {
                return Err(AppInfoError::Truncated);
            }
            let payload = &data[payload_start as usize..end as usize];
            let mut reader = KvReader {
                cur: Cursor::new(payload),
                strings: strings.as_deref(),
            };
            return reader.read_map().map(Some);
        }

        cur.set_position(end);
    }
}

fn read_string_table(data: &[u8], offset: i64) -> Result<Vec<String>, AppInfoError> {
    let offset = usize::try_from(offset).map_err(|_| AppInfoError::Truncated)?;
    if offset > data.len() {
        return Err(AppInfoError::Truncated);
    }
    let mut cur = Cursor::new(data);
    cur.set_position(offset as u64);
    let count = read_u32(&mut cur)?;
    let mut strings = Vec::with_capacity(count.min(1 << 16) as usize);
    for _ in 0..count {
        strings.push(read_cstr(&mut cur)?);
    }
    Ok(strings)
}

struct KvReader<'a> {
    cur: Cursor<&'a [u8]>,
    strings: Option<&'a [String]>,
}

impl<'a> KvReader<'a> {
    fn read_map(&mut self) -> Result<Value, AppInfoError> {
        let mut entries = Vec::new();
        loop {
            let ty = self.cur.read_u8().map_err(eof)?;
            if ty == TYPE_MAP_END || ty == TYPE_MAP_END_ALT {
                return Ok(Value::Map(entries));
            }
            let key = self.read_key()?;
            let value = match ty {
                TYPE_MAP => self.read_map()?,
                TYPE_STRING => Value::Str(read_cstr(&mut self.cur)?),
                TYPE_INT32 => Value::Int(self.cur.read_i32::<LittleEndian>().map_err(eof)?),
                TYPE_FLOAT32 => Value::Float(self.cur.read_f32::<LittleEndian>().map_err(eof)?),
                TYPE_POINTER => Value::Pointer(read_u32(&mut self.cur)?),
                TYPE_COLOR => Value::Color(read_u32(&mut self.cur)?),
                TYPE_UINT64 => Value::UInt64(self.cur.read_u64::<LittleEndian>().map_err(eof)?),
                TYPE_INT64 => Value::Int64(self.cur.read_i64::<LittleEndian>().map_err(eof)?),
                TYPE_WSTRING => return Err(AppInfoError::UnsupportedType(ty)),
                other => return Err(AppInfoError::UnsupportedType(other)),
            };
            entries.push((key, value));
        }
    }

    fn read_key(&mut self) -> Result<String, AppInfoError> {
        match self.strings {
            Some(strings) => {
                let idx = read_u32(&mut self.cur)?;
                strings
                    .get(idx as usize)
                    .cloned()
                    .ok_or(AppInfoError::BadStringIndex(idx))
            }
            None => read_cstr(&mut self.cur),
        }
    }
}

fn read_u32(cur: &mut Cursor<&[u8]>) -> Result<u32, AppInfoError> {
    cur.read_u32::<LittleEndian>().map_err(eof)
}

fn read_cstr(cur: &mut Cursor<&[u8]>) -> Result<String, AppInfoError> {
    let buf: &[u8] = *cur.get_ref();
    let start = cur.position() as usize;
    let rest = buf.get(start..).ok_or(AppInfoError::Truncated)?;
    let len = rest
        .iter()
        .position(|&b| b == 0)
        .ok_or(AppInfoError::Truncated)?;
    let s = String::from_utf8_lossy(&rest[..len]).into_owned();
    cur.set_position((start + len + 1) as u64);
    Ok(s)
}

fn eof(e: std::io::Error) -> AppInfoError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        AppInfoError::Truncated
    } else {
        AppInfoError::Io(e)
    }
}
