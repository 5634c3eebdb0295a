mod record_test;
