mod bill_repository_tests;
