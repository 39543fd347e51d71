mod access_test;
