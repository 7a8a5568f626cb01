//! UTF-8 -> UTF-16 -> UTF-8 round trip through two lazy pipelines.

use pullstream::{
    decode_utf16, decode_utf8, encode_utf16, encode_utf8, Consumer, Generator, MemoryReader,
    MemoryWriter, StreamResult,
};

fn main() -> StreamResult<()> {
    let text = "lazy pipelines, strict validation 😀";
    let utf8 = text.as_bytes();

    // First pass: UTF-8 bytes to UTF-16 code units.
    let mut source = MemoryReader::new(utf8);
    let mut unit_buf = vec![0u8; utf8.len() * 2];
    let mut unit_sink = MemoryWriter::new(&mut unit_buf);
    let units = Generator::<u8, _>::new(&mut source)
        >> decode_utf8()
        >> encode_utf16()
        >> Consumer::new(&mut unit_sink);
    println!("encoded {} UTF-16 units", units?);
    let unit_bytes = unit_sink.written().to_vec();

    // Second pass: back to UTF-8.
    let mut unit_source = MemoryReader::new(&unit_bytes);
    let mut byte_buf = vec![0u8; utf8.len()];
    let mut byte_sink = MemoryWriter::new(&mut byte_buf);
    let bytes = Generator::<u16, _>::new(&mut unit_source)
        >> decode_utf16()
        >> encode_utf8()
        >> Consumer::new(&mut byte_sink);
    println!("round-tripped {} UTF-8 bytes", bytes?);

    assert_eq!(byte_sink.written(), utf8);
    println!("round trip matches: {}", text);
    Ok(())
}
