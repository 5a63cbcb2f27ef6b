use std::fmt::Display;
use std::io::{Read, Write};

use errors::*;
use mapper::MapInputKV;

/// `read_map_input` reads a text source into a `MapInputKV` for one map task.
///
/// The `key` names the chunk, usually the path of the file the source was opened from; the
/// entire text of the source becomes the value.
pub fn read_map_input<R: Read>(key: &str, source: &mut R) -> Result<MapInputKV> {
    let mut value = String::new();
    let bytes_read = source.read_to_string(&mut value).chain_err(
        || "Error reading from source.",
    )?;
    if bytes_read == 0 {
        warn!("bytes_read is 0");
    }
    Ok(MapInputKV {
        key: key.to_owned(),
        value,
    })
}

/// `write_final_output` renders final pairs to a sink, one tab-separated `key<TAB>total` line
/// per pair, in the order given.
pub fn write_final_output<W, V>(sink: &mut W, pairs: &[(String, V)]) -> Result<()>
where
    W: Write,
    V: Display,
{
    for &(ref key, ref total) in pairs {
        writeln!(sink, "{}\t{}", key, total).chain_err(
            || "Error writing output pair to sink.",
        )?;
    }
    Ok(())
}
