use pixio_types::{Color, ColorError};

#[test]
fn rgba_keeps_channels() {
    let color = Color::rgba(10, 20, 30, 255);
    assert_eq!((color.r, color.g, color.b, color.a), (10, 20, 30, 255));
    assert_eq!(color.channels(), [10, 20, 30, 255]);
}

#[test]
fn rgb_is_opaque() {
    assert_eq!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, 255));
    assert_eq!(Color::default(), Color::BLACK);
}

#[test]
fn array_conversions() {
    let color = Color::from([0, 128, 255, 7]);
    assert_eq!(<[u8; 4]>::from(color), [0, 128, 255, 7]);
}

#[test]
fn hex_codes() {
    let cases = [
        ("#fff", [15, 15, 15, 255]),
        ("#128", [1, 2, 8, 255]),
        ("#abdfbe", [171, 223, 190, 255]),
        ("#deadbeef", [222, 173, 190, 239]),
        ("#ABDFBE", [171, 223, 190, 255]),
    ];

    for (code, expected) in cases {
        assert_eq!(Color::from_hex(code).unwrap().channels(), expected, "{code}");
    }
}

#[test]
fn invalid_hex_codes() {
    assert_eq!(Color::from_hex("fff"), Err(ColorError::MissingHash));
    assert_eq!(Color::from_hex("#ffff"), Err(ColorError::InvalidLength(4)));
    assert_eq!(Color::from_hex("#"), Err(ColorError::InvalidLength(0)));
    assert_eq!(Color::from_hex("#ggg"), Err(ColorError::InvalidDigit));
    assert_eq!(Color::from_hex("#12345z"), Err(ColorError::InvalidDigit));
}

#[test]
fn channel_lists() {
    let cases: [&[i64]; 4] = [
        &[0, 0, 0, 32],
        &[132, 247, 89],
        &[44, 114, 148],
        &[255, 255, 255, 255],
    ];

    for channels in cases {
        let color = Color::from_channels(channels).unwrap();
        let expected = channels.iter().map(|&c| c as u8).collect::<Vec<_>>();
        assert_eq!(color.channels()[..channels.len()], expected[..]);
    }

    assert_eq!(Color::from_channels(&[132, 247, 89]).unwrap().a, 255);
}

#[test]
fn invalid_channel_lists() {
    assert_eq!(Color::from_channels(&[1, 2]), Err(ColorError::ChannelCount(2)));
    assert_eq!(
        Color::from_channels(&[1, 2, 3, 4, 5]),
        Err(ColorError::ChannelCount(5))
    );
    assert_eq!(
        Color::from_channels(&[0, 256, 0]),
        Err(ColorError::ChannelRange(256))
    );
    assert_eq!(
        Color::from_channels(&[-1, 0, 0]),
        Err(ColorError::ChannelRange(-1))
    );
}

#[test]
fn parse_text() {
    assert_eq!("#deadbeef".parse::<Color>(), Ok(Color::rgba(222, 173, 190, 239)));
    assert_eq!(" 0, 0, 0, 255 ".parse::<Color>(), Ok(Color::BLACK));
    assert_eq!("255,255,255".parse::<Color>(), Ok(Color::WHITE));
    assert_eq!("red".parse::<Color>(), Err(ColorError::InvalidChannel));
    assert_eq!("1,2,x".parse::<Color>(), Err(ColorError::InvalidChannel));
}
