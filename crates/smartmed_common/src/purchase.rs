//! Purchase options with synthetic platform pricing.

use crate::catalog;
use crate::profile::DeliverySpeed;
use crate::response::PurchaseOption;

const SAME_DAY: &str = "Same day";

struct Platform {
    name: &'static str,
    price_factor: f64,
    delivery: &'static str,
    rating: f64,
    reviews: u32,
    offers: &'static str,
    search_url: &'static str,
}

static PLATFORMS: &[Platform] = &[
    Platform {
        name: "1mg",
        price_factor: 1.0,
        delivery: SAME_DAY,
        rating: 4.4,
        reviews: 2847,
        offers: "HEALTH15 - 15% off",
        search_url: "https://www.1mg.com/search/all?name=",
    },
    Platform {
        name: "NetMeds",
        price_factor: 0.95,
        delivery: "Next day",
        rating: 4.3,
        reviews: 1923,
        offers: "Free delivery >₹299",
        search_url: "https://www.netmeds.com/catalogsearch/result?q=",
    },
    Platform {
        name: "PharmEasy",
        price_factor: 1.05,
        delivery: SAME_DAY,
        rating: 4.2,
        reviews: 1456,
        offers: "FIRST20 - 20% off first order",
        search_url: "https://pharmeasy.in/search/all?name=",
    },
];

/// Percent-encode a URI component (RFC 3986 unreserved set plus `!*'()`)
pub fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// One option per platform for `medicine`.
///
/// Express delivery moves same-day platforms to the front; order is
/// otherwise the platform table order.
pub fn purchase_options(medicine: &str, delivery: DeliverySpeed) -> Vec<PurchaseOption> {
    let base = catalog::base_price(medicine);
    let query = encode_uri_component(medicine);

    let mut options: Vec<PurchaseOption> = PLATFORMS
        .iter()
        .map(|platform| PurchaseOption {
            platform: platform.name.to_string(),
            price: (base * platform.price_factor).round(),
            delivery: platform.delivery.to_string(),
            rating: platform.rating,
            reviews: platform.reviews,
            offers: platform.offers.to_string(),
            link: format!("{}{}", platform.search_url, query),
            in_stock: true,
        })
        .collect();

    if delivery == DeliverySpeed::Express {
        options.sort_by_key(|o| o.delivery != SAME_DAY);
    }
    options
}
