mod rule_table_tests;
