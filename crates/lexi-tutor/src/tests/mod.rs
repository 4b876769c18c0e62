mod prompt_tests;
