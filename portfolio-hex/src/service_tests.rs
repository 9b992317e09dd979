//! BankService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use portfolio_repo::InMemoryBankRepo;
    use portfolio_types::{
        AddExchangeRateRequest, AppError, BankRepository, ConvertRequest, CurrencyCode,
        EvaluatePortfolioRequest, ExchangeRateTable, MissingExchangeRateError, Money, RepoError,
        SetupBankRequest,
    };
    use CurrencyCode::*;

    use crate::BankService;

    /// Repository fake that records saves and can pretend a bank already exists.
    pub struct MockRepo {
        already_setup: bool,
        broken: bool,
        saved: Mutex<Option<ExchangeRateTable>>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                already_setup: false,
                broken: false,
                saved: Mutex::new(None),
            }
        }

        pub fn already_setup() -> Self {
            Self {
                already_setup: true,
                ..Self::new()
            }
        }

        pub fn broken() -> Self {
            Self {
                broken: true,
                ..Self::new()
            }
        }

        pub fn has_been_saved(&self) -> bool {
            self.saved.lock().unwrap().is_some()
        }
    }

    impl BankRepository for MockRepo {
        fn exists(&self) -> Result<bool, RepoError> {
            if self.broken {
                return Err(RepoError::Storage("unavailable".into()));
            }
            Ok(self.already_setup || self.has_been_saved())
        }

        fn get_bank(&self) -> Result<Option<ExchangeRateTable>, RepoError> {
            if self.broken {
                return Err(RepoError::Storage("unavailable".into()));
            }
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save(&self, bank: ExchangeRateTable) -> Result<(), RepoError> {
            if self.broken {
                return Err(RepoError::Storage("unavailable".into()));
            }
            *self.saved.lock().unwrap() = Some(bank);
            Ok(())
        }
    }

    fn setup(from: CurrencyCode, to: CurrencyCode, rate: f64) -> SetupBankRequest {
        SetupBankRequest { from, to, rate }
    }

    fn add(from: CurrencyCode, to: CurrencyCode, rate: f64) -> AddExchangeRateRequest {
        AddExchangeRateRequest { from, to, rate }
    }

    /// USD->USD 1.0, USD->KRW 1100, EUR->USD 1.2
    fn service_with_bank() -> BankService<InMemoryBankRepo> {
        let service = BankService::new(InMemoryBankRepo::new());
        service.setup_bank(setup(USD, USD, 1.0)).unwrap();
        service.add_exchange_rate(add(USD, KRW, 1100.0)).unwrap();
        service.add_exchange_rate(add(EUR, USD, 1.2)).unwrap();
        service
    }

    fn evaluate_request(lines: &[Money], to: CurrencyCode) -> EvaluatePortfolioRequest {
        EvaluatePortfolioRequest {
            lines: lines.to_vec(),
            to,
        }
    }

    #[test]
    fn test_setup_bank_success() {
        let service = BankService::new(MockRepo::new());

        service.setup_bank(setup(EUR, USD, 0.987)).unwrap();

        assert!(service.repo().has_been_saved());
        assert_eq!(service.bank().unwrap().rate(EUR, USD), Some(0.987));
    }

    #[test]
    fn test_setup_bank_invalid_rate_fails() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let service = BankService::new(MockRepo::new());

            let result = service.setup_bank(setup(EUR, USD, rate));

            assert!(
                matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "The command is invalid")
            );
            assert!(!service.repo().has_been_saved());
        }
    }

    #[test]
    fn test_setup_bank_already_setup_fails() {
        let service = BankService::new(MockRepo::already_setup());

        let result = service.setup_bank(setup(EUR, USD, 0.987));

        assert!(matches!(result, Err(AppError::Conflict(ref msg)) if msg == "Bank is already setup"));
        assert!(!service.repo().has_been_saved());
    }

    #[test]
    fn test_setup_bank_twice_fails() {
        let service = BankService::new(InMemoryBankRepo::new());
        service.setup_bank(setup(EUR, USD, 1.2)).unwrap();

        let result = service.setup_bank(setup(USD, KRW, 1100.0));

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(!service.bank().unwrap().can_convert(USD, KRW));
    }

    #[test]
    fn test_add_exchange_rate_without_bank_fails() {
        let service = BankService::new(MockRepo::new());

        let result = service.add_exchange_rate(add(EUR, USD, 1.2));

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_add_exchange_rate_invalid_rate_fails() {
        let service = service_with_bank();

        let result = service.add_exchange_rate(add(EUR, USD, -1.3));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.bank().unwrap().rate(EUR, USD), Some(1.2));
    }

    #[test]
    fn test_add_exchange_rate_replaces_rate() {
        let service = service_with_bank();

        service.add_exchange_rate(add(EUR, USD, 1.3)).unwrap();

        let converted = service
            .convert(ConvertRequest {
                amount: 10.0,
                currency: EUR,
                to: USD,
            })
            .unwrap();
        assert_eq!(converted, Money::new(13.0, USD));
    }

    #[test]
    fn test_convert_missing_rate() {
        let service = service_with_bank();

        let result = service.convert(ConvertRequest {
            amount: 10.0,
            currency: EUR,
            to: KRW,
        });

        assert!(matches!(
            result,
            Err(AppError::MissingExchangeRate(err)) if err == MissingExchangeRateError::new(EUR, KRW)
        ));
    }

    #[test]
    fn test_convert_without_bank_fails() {
        let service = BankService::new(MockRepo::new());

        let result = service.convert(ConvertRequest {
            amount: 1.0,
            currency: USD,
            to: USD,
        });

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_evaluate_success() {
        let service = service_with_bank();

        let response = service
            .evaluate(evaluate_request(
                &[Money::new(5.0, USD), Money::new(10.0, EUR)],
                USD,
            ))
            .unwrap();

        assert_eq!(response.amount, 17.0);
        assert_eq!(response.currency, USD);
        assert_eq!(response.lines, 2);
    }

    #[test]
    fn test_evaluate_in_krw() {
        let service = service_with_bank();

        let response = service
            .evaluate(evaluate_request(
                &[Money::new(1.0, USD), Money::new(1100.0, KRW)],
                KRW,
            ))
            .unwrap();

        assert_eq!(response.amount, 2200.0);
        assert_eq!(response.currency, KRW);
    }

    #[test]
    fn test_evaluate_reports_every_missing_rate() {
        let service = BankService::new(InMemoryBankRepo::new());
        service.setup_bank(setup(EUR, USD, 1.2)).unwrap();

        let result = service.evaluate(evaluate_request(
            &[
                Money::new(1.0, USD),
                Money::new(1.0, EUR),
                Money::new(1.0, KRW),
            ],
            KRW,
        ));

        match result {
            Err(AppError::MissingExchangeRates(missing)) => assert_eq!(
                missing.errors,
                vec![
                    MissingExchangeRateError::new(USD, KRW),
                    MissingExchangeRateError::new(EUR, KRW),
                ]
            ),
            other => panic!("expected missing exchange rates, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_empty_portfolio() {
        let service = service_with_bank();

        let response = service.evaluate(evaluate_request(&[], GBP)).unwrap();

        assert_eq!(response.amount, 0.0);
        assert_eq!(response.currency, GBP);
        assert_eq!(response.lines, 0);
    }

    #[test]
    fn test_storage_failure_is_internal_error() {
        let service = BankService::new(MockRepo::broken());

        let result = service.setup_bank(setup(EUR, USD, 1.2));

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
