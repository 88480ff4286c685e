use base64::{Engine as _, engine::general_purpose::STANDARD};

use totpgate::qr::{png_bytes, png_data_uri, PNG_DATA_URI_PREFIX};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const URL: &str = "otpauth://totp/MyApp:User?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&issuer=MyApp&algorithm=SHA1&digits=6&period=30";

#[test]
fn renders_png() {
    let png = png_bytes(URL).unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);
}

#[test]
fn data_uri_wraps_the_png() {
    let uri = png_data_uri(URL).unwrap();
    let encoded = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), png_bytes(URL).unwrap());
}
