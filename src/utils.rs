use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use qrcode::{render::svg, QrCode};
use regex::Regex;
use resvg::render;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use tiny_skia::Pixmap;
use usvg::{Options, Tree};

// Generate QR code for a Solana address
pub fn generate_qr_code(address: &str) -> Result<Vec<u8>> {
    // High error correction keeps the code readable in chat previews
    let code = QrCode::with_error_correction_level(address, qrcode::EcLevel::H)
        .map_err(|e| anyhow!("Failed to generate QR code: {}", e))?;

    let svg_string = code
        .render()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(svg_string.into_bytes())
}

/// Converts SVG (as bytes) to PNG (returns Vec<u8> with PNG data).
pub fn convert_svg_to_png(svg_data: &[u8]) -> Result<Vec<u8>> {
    let opt = Options::default();
    let tree = Tree::from_data(svg_data, &opt).map_err(|e| anyhow!("Error parsing SVG: {}", e))?;

    let svg_size = tree.size();
    let width = svg_size.width() as u32;
    let height = svg_size.height() as u32;

    let mut pixmap =
        Pixmap::new(width, height).ok_or_else(|| anyhow!("Failed to create Pixmap"))?;

    render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }

    Ok(png_data)
}

// Validate Solana address
pub fn validate_solana_address(address: &str) -> bool {
    Pubkey::from_str(address).is_ok()
}

/// Parse token basics from a pipe-separated line:
/// `Name | SYMBOL | description [| image URL]`
pub fn parse_token_basics(input: &str) -> Result<(String, String, String, Option<String>)> {
    let parts: Vec<&str> = input.split('|').map(str::trim).collect();

    if parts.len() < 3 || parts.len() > 4 {
        return Err(anyhow!(
            "Expected: <name> | <symbol> | <description> [| <image URL>]"
        ));
    }

    let name = parts[0].to_string();
    let symbol = parts[1].to_uppercase();
    let description = parts[2].to_string();
    let image_url = parts
        .get(3)
        .filter(|url| !url.is_empty())
        .map(|url| url.to_string());

    if name.is_empty() || symbol.is_empty() {
        return Err(anyhow!("Name and symbol must not be empty"));
    }

    Ok((name, symbol, description, image_url))
}

/// Parse tokenomics from a whitespace-separated line:
/// `<total supply> <initial price> <vesting days> <team %> [decimals]`
pub fn parse_tokenomics(input: &str) -> Result<(u64, f64, u32, f64, u8)> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() < 4 || parts.len() > 5 {
        return Err(anyhow!(
            "Expected: <total supply> <initial price> <vesting days> <team %> [decimals]"
        ));
    }

    let total_supply = parts[0]
        .replace(['_', ','], "")
        .parse::<u64>()
        .map_err(|_| anyhow!("Invalid total supply: {}", parts[0]))?;
    let initial_price = parts[1]
        .parse::<f64>()
        .map_err(|_| anyhow!("Invalid initial price: {}", parts[1]))?;
    let vesting_period = parts[2]
        .parse::<u32>()
        .map_err(|_| anyhow!("Invalid vesting period: {}", parts[2]))?;
    let team_allocation = parts[3]
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| anyhow!("Invalid team allocation: {}", parts[3]))?;
    let decimals = match parts.get(4) {
        Some(value) => value
            .parse::<u8>()
            .map_err(|_| anyhow!("Invalid decimals: {}", value))?,
        None => 9,
    };

    Ok((
        total_supply,
        initial_price,
        vesting_period,
        team_allocation,
        decimals,
    ))
}

// Parse swap details: "<amount> <source> <target> [<slippage>%]"
pub fn parse_swap_details(input: &str) -> Option<(f64, String, String, Option<f64>)> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r"^(\d+(?:\.\d+)?)\s+([A-Za-z]+)\s+([A-Za-z]+)(?:\s+(\d+(?:\.\d+)?)%)?$"
        )
        .unwrap();
    }

    RE.captures(input.trim()).and_then(|cap| {
        let amount = cap.get(1)?.as_str().parse::<f64>().ok()?;
        let source = cap.get(2)?.as_str().to_uppercase();
        let target = cap.get(3)?.as_str().to_uppercase();
        let slippage = cap
            .get(4)
            .and_then(|value| value.as_str().parse::<f64>().ok());

        Some((amount, source, target, slippage))
    })
}

// Parse one or two deposit amounts: "<amount A> [<amount B>]"
pub fn parse_deposit_amounts(input: &str) -> Option<(f64, Option<f64>)> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [a] => a.parse::<f64>().ok().map(|amount| (amount, None)),
        [a, b] => {
            let amount_a = a.parse::<f64>().ok()?;
            let amount_b = b.parse::<f64>().ok()?;
            Some((amount_a, Some(amount_b)))
        }
        _ => None,
    }
}

// Format amount with appropriate precision
pub fn format_amount(amount: f64, token: &str) -> String {
    match token.to_uppercase().as_str() {
        "SOL" => format!("{:.9}", amount),           // 9 decimals
        "USDC" | "USDT" => format!("{:.6}", amount), // 6 decimals
        _ => format!("{:.6}", amount),               // Default to 6 decimals
    }
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }

    let start = &address[..5];
    let end = &address[address.len() - 5..];

    format!("{}...{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_basics_parse_with_and_without_image() {
        let (name, symbol, description, image_url) =
            parse_token_basics("Quantum Doge | qdoge | To the moon").unwrap();
        assert_eq!(name, "Quantum Doge");
        assert_eq!(symbol, "QDOGE");
        assert_eq!(description, "To the moon");
        assert!(image_url.is_none());

        let (_, _, _, image_url) =
            parse_token_basics("Doge | D | hi | https://example.com/d.png").unwrap();
        assert_eq!(image_url.as_deref(), Some("https://example.com/d.png"));

        assert!(parse_token_basics("just a name").is_err());
    }

    #[test]
    fn tokenomics_parse_with_defaults() {
        let (supply, price, vesting, team, decimals) =
            parse_tokenomics("1,000,000 0.0001 12 10%").unwrap();
        assert_eq!(supply, 1_000_000);
        assert_eq!(price, 0.0001);
        assert_eq!(vesting, 12);
        assert_eq!(team, 10.0);
        assert_eq!(decimals, 9);

        let (.., decimals) = parse_tokenomics("500 0.5 0 0 6").unwrap();
        assert_eq!(decimals, 6);

        assert!(parse_tokenomics("not numbers at all x").is_err());
    }

    #[test]
    fn swap_details_parse_with_optional_slippage() {
        let (amount, source, target, slippage) = parse_swap_details("1.5 sol USDC 0.5%").unwrap();
        assert_eq!(amount, 1.5);
        assert_eq!(source, "SOL");
        assert_eq!(target, "USDC");
        assert_eq!(slippage, Some(0.5));

        let (.., slippage) = parse_swap_details("2 SOL BONK").unwrap();
        assert!(slippage.is_none());

        assert!(parse_swap_details("SOL 1.5 USDC").is_none());
    }

    #[test]
    fn deposit_amounts_parse_one_or_two() {
        assert_eq!(parse_deposit_amounts("1.5"), Some((1.5, None)));
        assert_eq!(parse_deposit_amounts("1.5 3.0"), Some((1.5, Some(3.0))));
        assert_eq!(parse_deposit_amounts("a b"), None);
        assert_eq!(parse_deposit_amounts(""), None);
    }

    #[test]
    fn address_display_helpers() {
        assert!(validate_solana_address(
            "So11111111111111111111111111111111111111112"
        ));
        assert!(!validate_solana_address("nope"));

        assert_eq!(
            shorten_address("So11111111111111111111111111111111111111112"),
            "So111...11112"
        );
        assert_eq!(shorten_address("short"), "short");
    }

    #[test]
    fn qr_code_renders_to_png() {
        let svg = generate_qr_code("So11111111111111111111111111111111111111112").unwrap();
        let png = convert_svg_to_png(&svg).unwrap();

        // PNG magic bytes
        assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
