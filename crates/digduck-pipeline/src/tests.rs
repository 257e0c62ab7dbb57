//! Scenario tests for the Pipeline

#[cfg(test)]
mod tests {
    use crate::{
        Encoding, ExportMode, Pipeline, PipelineConfig, PipelineError, Table, TextNormalizer,
    };
    use digduck_domain::Article;
    use digduck_filter::{FilterConfig, RejectionReason};
    use digduck_tagger::MockTagger;
    use std::io::{Cursor, Read};

    // Verb-rich body: kept by the score rules
    const NEWS: &str = "選挙/名詞-サ変接続 が/助詞 行わ/動詞-自立 れ/動詞-接尾 た/助動詞。\
                        投票/名詞-サ変接続 率/名詞-接尾 は/助詞 上がっ/動詞-自立 た/助動詞。";

    // Byline: every sentence names a person or a title
    const BYLINE: &str = "山田/名詞-固有名詞-人名-姓 太郎/名詞-固有名詞-人名-名 。\
                          代表取締役/名詞-一般 社長/名詞-一般";

    fn inline_pipeline(filter_config: FilterConfig) -> Pipeline<MockTagger> {
        Pipeline::new(MockTagger::inline(), filter_config, PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_keyword_selects_first_row() {
        let pipeline = inline_pipeline(FilterConfig::default().with_keywords(["選挙"]));
        let articles = vec![
            Article::new(0, NEWS),
            Article::new(1, "天気/名詞-一般 が/助詞 崩れ/動詞-自立 た/助動詞"),
        ];

        let result = pipeline.export_filtered(&articles);
        let report = result.report.as_ref().unwrap();

        assert_eq!(result.mode, ExportMode::Filtered);
        assert_eq!(report.kept.len(), 1);
        assert_eq!(report.kept[0].article.row, 0);
        assert_eq!(result.metadata.total_articles, 2);
        assert_eq!(result.metadata.exported_articles, 1);
        assert_eq!(result.sentences.len(), 2);
        assert!(result.sentences[0].starts_with("選挙/名詞-サ変接続"));
    }

    #[test]
    fn test_byline_article_is_excluded() {
        let pipeline = inline_pipeline(FilterConfig::default());
        let result = pipeline.export_filtered(&[Article::new(0, BYLINE), Article::new(1, NEWS)]);
        let report = result.report.unwrap();

        assert_eq!(report.kept_count(), 1);
        assert_eq!(report.kept[0].article.row, 1);
        assert!(report.verdicts[0]
            .reasons
            .iter()
            .any(|r| matches!(r, RejectionReason::PersonTitleHeavy { .. })));
    }

    #[test]
    fn test_bullet_export_skips_filter() {
        let pipeline = inline_pipeline(FilterConfig::default().with_keywords(["存在しない"]));
        let result = pipeline.export_bullets(&[Article::new(0, BYLINE), Article::new(1, NEWS)]);

        assert_eq!(result.mode, ExportMode::Bullet);
        assert!(result.report.is_none());
        assert_eq!(result.metadata.exported_articles, 2);
        assert_eq!(result.sentences.len(), 4);
        assert_eq!(pipeline.filter().scorer().tagger().call_count(), 0);
    }

    #[test]
    fn test_symbol_only_article_contributes_nothing() {
        let pipeline = inline_pipeline(FilterConfig::default());
        assert_eq!(TextNormalizer::default().normalize("●■×▼◇"), "");

        let result =
            pipeline.export_bullets(&[Article::new(0, "●■×▼◇"), Article::new(1, "「」。…。")]);
        assert!(result.sentences.is_empty());
        assert!(result.chunks.is_empty());
    }

    #[test]
    fn test_sentences_are_cleaned_across_articles() {
        let pipeline = inline_pipeline(FilterConfig::default());
        let sentences = pipeline.sentences([
            "  ■見出し\n   本文一。・・・。",
            "x000D二つ目の記事！　本当？",
        ]);
        assert_eq!(sentences, vec!["見出し\n本文一", "二つ目の記事", "本当"]);
    }

    #[test]
    fn test_chunking_across_articles() {
        let mut config = PipelineConfig::default();
        config.chunk_size = 3;
        let pipeline =
            Pipeline::new(MockTagger::default(), FilterConfig::default(), config).unwrap();

        let articles: Vec<Article> = (0..4)
            .map(|row| Article::new(row, format!("記事{}の一文。記事{}の二文。", row, row)))
            .collect();
        let result = pipeline.export_bullets(&articles);

        assert_eq!(result.metadata.sentence_count, 8);
        let sizes: Vec<usize> = result.chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2]);
        assert_eq!(result.chunks[1].sentences[0], "記事1の二文");
    }

    #[test]
    fn test_archive_round_trip_through_zip() {
        let pipeline = inline_pipeline(FilterConfig::default());
        let result = pipeline.export_bullets(&[Article::new(0, "一。二。三。")]);

        let bytes = pipeline.archive(&result).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name("processed_part_1.txt").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();

        assert_eq!(content, "一\n二\n三");
    }

    #[test]
    fn test_write_chunk_files() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = inline_pipeline(FilterConfig::default());
        let result = pipeline.export_bullets(&[Article::new(0, "一。二。")]);

        let paths = pipeline.write_chunk_files(&result, dir.path()).unwrap();
        assert_eq!(paths, vec![dir.path().join("processed_part_1.txt")]);
    }

    #[test]
    fn test_missing_column_fails_before_processing() {
        let pipeline = inline_pipeline(FilterConfig::default());
        let table = Table::from_csv_str("title,body\nA,B\n").unwrap();

        let result = pipeline.load_articles(&table);
        assert!(matches!(result, Err(PipelineError::ColumnNotFound { .. })));
        assert_eq!(pipeline.filter().scorer().tagger().call_count(), 0);
    }

    #[test]
    fn test_shift_jis_table_end_to_end() {
        let csv = "honbun\n本日、選挙が行われた。結果は明日。\n";
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(csv);
        let table = Table::from_bytes(&encoded, Encoding::ShiftJis).unwrap();

        let pipeline = inline_pipeline(FilterConfig::default());
        let articles = pipeline.load_articles(&table).unwrap();
        let result = pipeline.export_bullets(&articles);

        assert_eq!(result.sentences, vec!["本日、選挙が行われた", "結果は明日"]);
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = PipelineConfig::default();
        config.chunk_size = 0;
        let result = Pipeline::new(MockTagger::default(), FilterConfig::default(), config);
        assert!(matches!(result, Err(PipelineError::Config(_))));

        let mut filter_config = FilterConfig::default();
        filter_config.max_garbage_ratio = 2.0;
        let result = Pipeline::new(MockTagger::default(), filter_config, PipelineConfig::default());
        assert!(matches!(result, Err(PipelineError::Filter(_))));
    }

    #[test]
    fn test_garbage_article_is_dropped_from_filtered_export() {
        let pipeline = inline_pipeline(FilterConfig::default());
        let garbage = format!("{}x000D", "あ".repeat(10));
        let result = pipeline.export_filtered(&[Article::new(0, garbage), Article::new(1, NEWS)]);

        assert_eq!(result.metadata.exported_articles, 1);
        assert_eq!(result.report.unwrap().verdicts[0].reasons.len(), 1);
    }
}
