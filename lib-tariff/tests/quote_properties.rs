//! Quote properties over arbitrary requests against the standard sheet.

use lib_tariff::{compute_quote, PlanId, QuoteRequest, QuoteResult, RateSheet, TariffSheet};
use proptest::prelude::*;

const MOBILE: [&str; 4] = ["mobile-small", "mobile-medium", "mobile-large", "mobile-unlimited"];
const INTERNET: [&str; 3] = ["fiber-100", "fiber-1000", "fiber-2500"];

fn request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        proptest::option::of(0usize..INTERNET.len()),
        proptest::collection::vec(0usize..MOBILE.len(), 0..6),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0u64..20_000),
    )
        .prop_map(|(internet, lines, second_address, comfort, current)| QuoteRequest {
            internet: internet.map(|i| PlanId::from(INTERNET[i])),
            mobile_lines: lines.into_iter().map(|i| PlanId::from(MOBILE[i])).collect(),
            tv: None,
            second_address,
            comfort,
            current_monthly_cost: current,
        })
}

proptest! {
    #[test]
    fn prop_all_lines_share_one_rate_sheet(request in request_strategy()) {
        let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
        let expected = RateSheet::for_quote(request.mobile_lines.len(), request.internet.is_some());
        prop_assert!(quote.mobile_lines.iter().all(|line| line.rate_sheet == expected));
    }

    #[test]
    fn prop_total_is_sum_of_components(request in request_strategy()) {
        let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
        let lines: u64 = quote.mobile_lines.iter().map(|l| l.price).sum();
        let internet = quote.internet.as_ref().map_or(0, |i| i.price);
        let comfort = quote.comfort.map_or(0, |c| c.price);
        prop_assert_eq!(quote.monthly_total, lines + internet + comfort);
    }

    #[test]
    fn prop_internet_price_never_exceeds_list(request in request_strategy()) {
        let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
        if let Some(internet) = quote.internet {
            prop_assert!(internet.price <= internet.list_price);
            prop_assert_eq!(
                internet.price,
                internet.list_price - internet.convergence_discount - internet.second_address_discount
            );
        }
    }

    #[test]
    fn prop_savings_scale_with_horizon(request in request_strategy()) {
        let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
        match (request.current_monthly_cost, quote.savings) {
            (Some(current), Some(savings)) => {
                let delta = current as i64 - quote.monthly_total as i64;
                prop_assert_eq!(savings.monthly_delta, delta);
                prop_assert_eq!(savings.six_months, delta * 6);
                prop_assert_eq!(savings.twenty_four_months, delta * 24);
            }
            (None, None) => {}
            other => prop_assert!(false, "savings mismatch: {:?}", other),
        }
    }

    #[test]
    fn prop_quote_is_deterministic(request in request_strategy()) {
        let sheet = TariffSheet::standard();
        prop_assert_eq!(
            compute_quote(&sheet, &request).unwrap(),
            compute_quote(&sheet, &request).unwrap()
        );
    }
}

#[test]
fn test_tv_is_priced_flat() {
    let request = QuoteRequest {
        tv: Some(PlanId::from("tv")),
        ..QuoteRequest::default()
    };
    let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
    assert_eq!(quote.tv.unwrap().price, 999);
    assert_eq!(quote.monthly_total, 999);
}

#[test]
fn test_quote_json_keeps_integer_cents() {
    let request = QuoteRequest {
        internet: Some(PlanId::from("fiber-1000")),
        mobile_lines: vec![PlanId::from("mobile-medium"), PlanId::from("mobile-large")],
        current_monthly_cost: Some(2_000),
        ..QuoteRequest::default()
    };
    let quote = compute_quote(&TariffSheet::standard(), &request).unwrap();
    let savings = quote.savings.unwrap();
    assert!(savings.monthly_delta < 0);

    let json = serde_json::to_value(&quote).unwrap();
    assert!(json["monthly_total"].is_u64());
    assert_eq!(json["monthly_total"].as_u64(), Some(quote.monthly_total));
    assert!(json["savings"]["monthly_delta"].is_i64());
    assert_eq!(json["savings"]["monthly_delta"].as_i64(), Some(savings.monthly_delta));
    assert_eq!(
        json["savings"]["twenty_four_months"].as_i64(),
        Some(savings.monthly_delta * 24)
    );
    for line in json["mobile_lines"].as_array().unwrap() {
        assert!(line["price"].is_u64(), "{line}");
    }

    let back: QuoteResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, quote);
}
