mod update_hook_test;
