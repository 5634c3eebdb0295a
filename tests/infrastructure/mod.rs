mod http_transcript_fetcher_test;
