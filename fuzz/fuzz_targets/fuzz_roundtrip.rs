#![no_main]

use arbitrary::Arbitrary;
use convkit_engine::CodecError;
use convkit_engine::codecs::{base32, base64, binary, hex, html, unicode, url};
use libfuzzer_sys::fuzz_target;

type Transform = fn(&str) -> Result<String, CodecError>;

#[derive(Arbitrary, Debug)]
enum Codec {
    Base64,
    Base32,
    Hex,
    Binary,
    Url,
    Html,
    Unicode,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    codec: Codec,
    text: String,
}

fuzz_target!(|data: FuzzInput| {
    let (encode, decode): (Transform, Transform) = match data.codec {
        Codec::Base64 => (base64::encode, base64::decode),
        Codec::Base32 => (base32::encode, base32::decode),
        Codec::Hex => (hex::encode, hex::decode),
        Codec::Binary => (binary::encode, binary::decode),
        Codec::Url => (url::encode, url::decode),
        Codec::Html => (html::encode, html::decode),
        Codec::Unicode => (unicode::encode, unicode::decode),
    };

    // Byte codecs refuse characters above U+00FF. Anything accepted must roundtrip.
    if let Ok(encoded) = encode(&data.text) {
        let decoded = decode(&encoded).expect("encoder output must decode");
        assert_eq!(decoded, data.text, "{:?} via {encoded:?}", data.codec);
    }
});
