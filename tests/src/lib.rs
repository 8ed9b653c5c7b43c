#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use recovery_core::{
        wire, Reconstructor, Result, SearchStrategy, VerifierConfig,
    };
    use recovery_math::Point;

    const FIRST: &str = include_str!("../../cli/samples/case1.json");
    const SECOND: &str = include_str!("../../cli/samples/case2.json");

    #[test]
    fn test_complete_workflow() -> Result<()> {
        // 1. Parse both documents as one batch
        let mut cases = wire::parse_cases(FIRST)?;
        cases.extend(wire::parse_cases(SECOND)?);
        assert_eq!(cases.len(), 2);

        // 2. Reconstruct with default settings
        let reconstructor = Reconstructor::new(VerifierConfig::default())?;
        let results = reconstructor.reconstruct_all(&cases);

        // 3. Fully consistent case: no wrong points
        let first = results[0].as_ref().expect("first case reconstructs");
        assert_eq!(first.secret, BigInt::from(3));
        assert!(first.is_clean());

        // 4. Redundant case with one bad share
        let second = results[1].as_ref().expect("second case reconstructs");
        assert_eq!(second.secret, BigInt::from(28_735_619_723_864_u64));
        assert_eq!(
            second.outliers,
            vec![Point::new(7, 28_859_585_857_715_u64)]
        );
        assert_eq!(second.strategy, SearchStrategy::Exhaustive);
        Ok(())
    }

    #[test]
    fn test_wire_round_trip_keeps_secret() -> Result<()> {
        let case = wire::parse_case(SECOND)?;
        let rewritten = wire::parse_case(&wire::to_json(&case)?)?;
        assert_eq!(rewritten, case);

        let result = recovery_core::reconstruct(&rewritten)?;
        assert_eq!(result.secret, BigInt::from(28_735_619_723_864_u64));
        Ok(())
    }

    #[test]
    fn test_greedy_and_exhaustive_agree_on_sample() -> Result<()> {
        let case = wire::parse_case(SECOND)?;
        let exhaustive = Reconstructor::default().reconstruct(&case)?;
        let greedy =
            Reconstructor::new(VerifierConfig::new(1))?.reconstruct(&case)?;

        assert_eq!(greedy.strategy, SearchStrategy::Greedy);
        assert_eq!(greedy.secret, exhaustive.secret);
        assert_eq!(greedy.outlier_xs().collect::<Vec<_>>(), vec![&BigInt::from(7)]);
        Ok(())
    }

    #[test]
    fn test_result_serializes_with_decimal_strings() -> Result<()> {
        let case = wire::parse_case(SECOND)?;
        let result = recovery_core::reconstruct(&case)?;
        let json = serde_json::to_value(&result).expect("result serializes");

        assert_eq!(json["secret"], "28735619723864");
        assert_eq!(json["outliers"][0]["x"], "7");
        assert_eq!(json["outliers"][0]["y"], "28859585857715");
        assert_eq!(json["support"], 28);
        Ok(())
    }
}
