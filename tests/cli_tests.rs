use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn quote_cmd(
    from_country: &str,
    from_currency: &str,
    to_country: &str,
    to_currency: &str,
    amount: &str,
) -> Command {
    let mut cmd = Command::new(cargo_bin!("remitquote"));
    cmd.arg("--from-currency")
        .arg(from_currency)
        .arg("--to-currency")
        .arg(to_currency)
        .arg("--from-country")
        .arg(from_country)
        .arg("--to-country")
        .arg(to_country)
        .arg("--amount")
        .arg(amount);
    cmd
}

#[test]
fn test_quote_for_gbp_corridor() {
    quote_cmd("GB", "GBP", "FR", "EUR", "1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"options\""))
        .stdout(predicate::str::contains("\"now\""))
        .stdout(predicate::str::contains("\"standard\""))
        .stdout(predicate::str::contains("\"isAvailable\":true"));
}

#[test]
fn test_quote_for_try_corridor_has_no_now_tier() {
    quote_cmd("TR", "TRY", "FR", "EUR", "1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"today\""))
        .stdout(predicate::str::contains("\"standard\""))
        .stdout(predicate::str::contains("\"now\"").not());
}

#[test]
fn test_too_small_amount_maps_to_message_key() {
    quote_cmd("FR", "EUR", "GB", "GBP", "0.99")
        .assert()
        .failure()
        .stdout(predicate::str::contains("{\"message\":\"tooSmallAmount\"}"));
}

#[test]
fn test_too_large_amount_maps_to_message_key() {
    quote_cmd("FR", "EUR", "GB", "GBP", "1000001")
        .assert()
        .failure()
        .stdout(predicate::str::contains("{\"message\":\"invalidAmount\"}"));
}

#[test]
fn test_bounds_are_inclusive_at_the_cli() {
    quote_cmd("FR", "EUR", "GB", "GBP", "1.00").assert().success();
    quote_cmd("FR", "EUR", "GB", "GBP", "1000000").assert().success();
}

#[test]
fn test_unknown_corridor_maps_to_message_key() {
    quote_cmd("DE", "EUR", "GB", "GBP", "1000")
        .assert()
        .failure()
        .stdout(predicate::str::contains("{\"message\":\"unknownCorridor\"}"));
}

#[test]
fn test_bad_calculation_base_is_invalid_request() {
    quote_cmd("GB", "GBP", "FR", "EUR", "1000")
        .arg("--calculation-base")
        .arg("send_amount")
        .assert()
        .failure()
        .stdout(predicate::str::contains("{\"message\":\"invalidRequest\"}"));
}

#[test]
fn test_quote_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "corridors": [
                {
                    "fromCountryCode": "PL",
                    "fromCurrencyCode": "PLN",
                    "toCountryCode": "UA",
                    "toCurrencyCode": "UAH",
                    "minAmount": "10",
                    "maxAmount": "50000",
                    "tiers": [
                        {
                            "code": "standard",
                            "ceiling": "50000",
                            "rate": "9.85",
                            "fee": { "fixed": "1.00", "percent": "0" }
                        }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    quote_cmd("PL", "PLN", "UA", "UAH", "100")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"standard\""))
        // (100 - 1.00) * 9.85 = 975.15
        .stdout(predicate::str::contains("\"value\":\"975.15\""));
}
