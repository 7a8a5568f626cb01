use pullstream::{
    MemoryReader, MemoryWriter, ReadStreamExt, SeekOrigin, SeekStream, StreamError, WriteStreamExt,
};

fn sixteen_bytes() -> Vec<u8> {
    (0u8..16).collect()
}

#[test]
fn test_read_value_advances_by_size() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let a: u8 = stream.read_value().unwrap();
    assert_eq!(a, 0);
    assert_eq!(stream.remaining(), 15);

    let b: u16 = stream.read_value().unwrap();
    assert_eq!(b, u16::from_ne_bytes([1, 2]));
    assert_eq!(stream.remaining(), 13);

    let c: u32 = stream.read_value().unwrap();
    assert_eq!(c, u32::from_ne_bytes([3, 4, 5, 6]));
    assert_eq!(stream.remaining(), 9);
}

#[test]
fn test_read_value_end_of_stream() {
    let data = [1u8, 2, 3];
    let mut stream = MemoryReader::new(&data);

    // Three bytes cannot supply a u32; no truncated value is produced.
    assert_eq!(
        stream.read_value::<u32>(),
        Err(StreamError::EndOfStream)
    );

    let mut empty = MemoryReader::new(&[]);
    assert_eq!(empty.read_value::<u8>(), Err(StreamError::EndOfStream));
}

#[test]
fn test_failed_typed_read_consumes_nothing() {
    let data = [1u8, 2, 3];
    let mut stream = MemoryReader::new(&data);

    assert_eq!(stream.read_value::<u32>(), Err(StreamError::EndOfStream));
    // The trailing bytes are still there for smaller reads.
    assert_eq!(stream.remaining(), 3);
    assert_eq!(stream.read_value::<u16>().unwrap(), u16::from_ne_bytes([1, 2]));
    assert_eq!(stream.read_value::<u32>(), Err(StreamError::EndOfStream));
    assert_eq!(stream.remaining(), 1);
    assert_eq!(stream.read_value::<u8>().unwrap(), 3);
}

#[test]
fn test_round_trip_three_access_paths() {
    // The same sequence of values must come back through a fresh read
    // loop, a reset, and a seek to the start.
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let mut first = Vec::new();
    while let Ok(v) = stream.read_value::<u32>() {
        first.push(v);
    }

    stream.reset(&data);
    let mut second = Vec::new();
    while let Ok(v) = stream.read_value::<u32>() {
        second.push(v);
    }

    stream.seek(SeekOrigin::Begin(0)).unwrap();
    let mut third = Vec::new();
    while let Ok(v) = stream.read_value::<u32>() {
        third.push(v);
    }

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_round_trip_all_widths() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let bytes: Vec<u8> = std::iter::from_fn(|| stream.read_value::<u8>().ok()).collect();
    assert_eq!(bytes, data);

    stream.reset(&data);
    let words: Vec<u16> = std::iter::from_fn(|| stream.read_value::<u16>().ok()).collect();
    let expected_words: Vec<u16> = data
        .chunks(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(words, expected_words);

    stream.reset(&data);
    let dwords: Vec<u32> = std::iter::from_fn(|| stream.read_value::<u32>().ok()).collect();
    let expected_dwords: Vec<u32> = data
        .chunks(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(dwords, expected_dwords);
}

#[cfg(target_endian = "little")]
#[test]
fn test_little_endian_reinterpretation() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let dwords: Vec<u32> = std::iter::from_fn(|| stream.read_value::<u32>().ok()).collect();
    assert_eq!(dwords, vec![0x03020100, 0x07060504, 0x0b0a0908, 0x0f0e0d0c]);
}

#[test]
fn test_write_value_then_read_back() {
    let mut buf = [0u8; 16];
    let mut writer = MemoryWriter::new(&mut buf);

    writer.write_value(0xdead_beefu32).unwrap();
    writer.write_value(-7i16).unwrap();
    writer.write_value(1.5f64).unwrap();

    let written = writer.written().to_vec();
    let mut reader = MemoryReader::new(&written);
    assert_eq!(reader.read_value::<u32>().unwrap(), 0xdead_beef);
    assert_eq!(reader.read_value::<i16>().unwrap(), -7);
    assert_eq!(reader.read_value::<f64>().unwrap(), 1.5);
}

#[test]
fn test_random_values_round_trip() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let values: Vec<u64> = (0..64).map(|_| rng.gen()).collect();

    let mut buf = vec![0u8; values.len() * 8];
    let mut writer = MemoryWriter::new(&mut buf);
    for &v in &values {
        writer.write_value(v).unwrap();
    }

    let written = writer.written().to_vec();
    let mut reader = MemoryReader::new(&written);
    let read_back: Vec<u64> = std::iter::from_fn(|| reader.read_value::<u64>().ok()).collect();
    assert_eq!(read_back, values);
}

#[test]
fn test_write_value_resource_exhausted() {
    let mut buf = [0u8; 3];
    let mut writer = MemoryWriter::new(&mut buf);

    assert_eq!(
        writer.write_value(1u32),
        Err(StreamError::ResourceExhausted)
    );
}
