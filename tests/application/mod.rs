mod recognition_service_test;
