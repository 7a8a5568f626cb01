//! Reads a fixed buffer three ways: raw bytes, typed values, iterator.

use pullstream::{
    MemoryReader, ReadStream, ReadStreamExt, SeekOrigin, SeekStream, StreamResult, ValuesExt,
};

fn main() -> StreamResult<()> {
    let data: Vec<u8> = (0u8..16).collect();
    let mut stream = MemoryReader::new(&data);

    let mut head = [0u8; 4];
    let n = stream.read_bytes(&mut head)?;
    println!("raw read: {:?} ({} bytes)", &head[..n], n);

    stream.seek(SeekOrigin::Begin(0))?;
    let first: u32 = stream.read_value()?;
    println!("first u32 (native endian): {:#010x}", first);

    stream.rewind()?;
    let words: Vec<u16> = stream.values::<u16>().collect();
    println!("as u16 words: {:04x?}", words);

    // Same stream object, fresh pass over a different region.
    let other = [0xde, 0xad, 0xbe, 0xef];
    stream.reset(&other);
    println!("after reset: {:#010x}", stream.read_value::<u32>()?);

    Ok(())
}
